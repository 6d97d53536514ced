use super::*;
use crate::alphabet::RESERVED;

#[test]
fn default_is_a_and_b() {
    let alphabet = Alphabet::default();

    assert_eq!(alphabet.symbols().collect::<Vec<_>>(), vec!['a', 'b']);
    assert_eq!(alphabet.to_string(), "{a, b}");
}

#[test]
fn parses_sorted_and_deduplicated() {
    let alphabet: Alphabet = "cabca".parse().unwrap();

    assert_eq!(alphabet.symbols().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    assert_eq!(alphabet.len(), 3);
    assert!(alphabet.contains('c'));
    assert!(!alphabet.contains('d'));
}

#[test]
fn rejects_reserved_characters() {
    for reserved in RESERVED {
        let err = Alphabet::new(['a', reserved]).unwrap_err();
        assert_eq!(err, AlphabetError::Reserved(reserved));
    }
}

#[test]
fn rejects_empty_and_whitespace() {
    assert_eq!("".parse::<Alphabet>().unwrap_err(), AlphabetError::Empty);
    assert_eq!("a b".parse::<Alphabet>().unwrap_err(), AlphabetError::Whitespace);
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        AlphabetError::Reserved('*').to_string(),
        @"'*' is reserved by the regex grammar and cannot be an input symbol"
    );
}

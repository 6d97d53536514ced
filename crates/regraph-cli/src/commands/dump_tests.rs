use regraph_lib::{Alphabet, Compiler, compile};

use super::dump::{Stage, render_json, render_text};

#[test]
fn text_all_stages() {
    let automata = compile("a+b", &Alphabet::default()).unwrap();

    insta::assert_snapshot!(render_text(&automata, Stage::All, false), @r"
    # ε-NFA
    start: a → final, ε → 0
    0: b → final
    final: ∅
    accept: final

    # NFA
    start: a → final, b → final
    final: ∅
    accept: final

    # DFA
    {start}: a → {final}, b → {final}
    {final}: ∅
    accept: {final}
    ");
}

#[test]
fn text_single_stage() {
    let automata = compile("a*", &Alphabet::default()).unwrap();

    insta::assert_snapshot!(render_text(&automata, Stage::Dfa, false), @r"
    {start}: a → {0, final}
    {0, final}: a → {0, final}
    accept: {start}, {0, final}
    ");
}

#[test]
fn json_single_stage_without_layout() {
    let automata = Compiler::default().with_layout(false).compile("a").unwrap();

    insta::assert_snapshot!(render_json(&automata, Stage::Nfa).unwrap(), @r#"
    {
      "vertices": [
        "start",
        "final"
      ],
      "edges": [
        {
          "source": "start",
          "target": "final",
          "label": "a"
        }
      ],
      "finals": [
        "final"
      ]
    }
    "#);
}

#[test]
fn json_all_stages_has_every_key() {
    let automata = compile("(ab)*", &Alphabet::default()).unwrap();

    let json = render_json(&automata, Stage::All).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in ["epsilon_nfa", "nfa", "dfa"] {
        assert!(value[key]["vertices"].is_array(), "{key}");
        assert!(value[key]["layout"].is_object(), "{key}");
    }
    assert_eq!(value["dfa"]["finals"][0], "{start}");
}

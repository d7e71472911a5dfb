//! End-to-end investigations through the built-in mansion.

mod common;

use common::play_mansion;
use detective_quest::case::{AccusationResult, Outcome};

#[test]
fn left_left_quit_convicts_dona_beatriz() {
    let (report, text) = play_mansion(&["e", "e", "s", "Dona Beatriz"]);
    assert_eq!(
        report.clues,
        vec![
            "Copo com fragmento de esmalte",
            "Pegada suja",
            "Perfume feminino caro"
        ]
    );
    let verdict = report.verdict().expect("verdict rendered");
    assert_eq!(verdict.count, 2);
    assert_eq!(verdict.outcome, Outcome::Guilty);
    assert!(text.contains("Você entrou na sala: Cozinha"));
    assert!(text.contains("Pistas que apontam para Dona Beatriz: 2"));
    assert!(text.contains("VEREDICTO: Há pistas suficientes! Dona Beatriz é considerado culpado."));
}

#[test]
fn right_right_quit_convicts_the_professor() {
    let (report, text) = play_mansion(&["d", "d", "s", "Professor Otávio"]);
    assert_eq!(
        report.clues,
        vec!["Livro rasgado", "Luva encharcada", "Pegada suja"]
    );
    let verdict = report.verdict().unwrap();
    assert_eq!(verdict.count, 2);
    assert!(verdict.is_guilty());
    assert_eq!(verdict.matching_clues, vec!["Livro rasgado", "Luva encharcada"]);
    assert!(text.contains("Você entrou na sala: Porão"));
}

#[test]
fn right_right_quit_is_not_enough_for_carlos() {
    let (report, text) = play_mansion(&["d", "d", "s", "Carlos"]);
    let verdict = report.verdict().unwrap();
    assert_eq!(verdict.count, 1);
    assert_eq!(verdict.outcome, Outcome::Insufficient);
    assert!(text.contains("VEREDICTO: Pistas insuficientes. Carlos não pode ser acusado com segurança."));
}

#[test]
fn immediate_quit_keeps_only_the_entrance_clue() {
    for accused in ["Carlos", "Dona Beatriz", "Professor Otávio", "Mordomo"] {
        let (report, _) = play_mansion(&["s", accused]);
        assert_eq!(report.clues, vec!["Pegada suja"]);
        let verdict = report.verdict().unwrap();
        assert!(verdict.count <= 1);
        assert_eq!(verdict.outcome, Outcome::Insufficient);
    }
    let (report, _) = play_mansion(&["s", "Carlos"]);
    assert_eq!(report.verdict().unwrap().count, 1);
}

#[test]
fn empty_accusation_is_rejected_without_a_count() {
    let (report, text) = play_mansion(&["s", ""]);
    assert_eq!(report.accusation, AccusationResult::Empty);
    assert!(text.contains("Acusação inválida"));
    assert!(!text.contains("Pistas que apontam"));
}

#[test]
fn blocked_left_leaves_room_and_clues_alone() {
    // Biblioteca has no left path.
    let (report, text) = play_mansion(&["d", "e", "e", "s", "Carlos"]);
    assert_eq!(text.matches("Não há caminho à esquerda.").count(), 2);
    assert_eq!(text.matches("Você entrou na sala: Biblioteca").count(), 1);
    assert_eq!(report.clues, vec!["Livro rasgado", "Pegada suja"]);
    assert_eq!(report.moves, 1);
}

#[test]
fn commands_accept_words_and_ignore_trailing_text() {
    let (report, _) = play_mansion(&["ESQUERDA por favor", "direita", "sair agora", "Carlos"]);
    assert_eq!(
        report.clues,
        vec!["Filtro de cigarro", "Pegada suja", "Perfume feminino caro"]
    );
    assert!(report.verdict().unwrap().is_guilty());
}

#[test]
fn end_of_input_during_exploration_is_an_implicit_quit() {
    let (report, text) = play_mansion(&["e"]);
    assert!(text.contains("Entrada inválida. Encerrando."));
    assert_eq!(report.clues, vec!["Pegada suja", "Perfume feminino caro"]);
    assert_eq!(report.accusation, AccusationResult::Unreadable);
}

#[test]
fn accusation_is_case_sensitive() {
    let (report, _) = play_mansion(&["e", "e", "s", "dona beatriz"]);
    assert_eq!(report.verdict().unwrap().count, 0);
}

#[test]
fn clue_listing_is_alphabetical() {
    let (_, text) = play_mansion(&["e", "d", "s", "Carlos"]);
    let start = text.find("===== Pistas coletadas").unwrap();
    let listed: Vec<&str> = text[start..]
        .lines()
        .filter_map(|l| l.strip_prefix(" - "))
        .collect();
    assert_eq!(
        listed,
        vec!["Filtro de cigarro", "Pegada suja", "Perfume feminino caro"]
    );
}

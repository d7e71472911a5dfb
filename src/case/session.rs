//! Interactive session: the text protocol around the explorer and the verdict.
//!
//! A session reads player lines from any `BufRead` and writes the game text to
//! any `Write`, so the binary can hand it stdin/stdout and tests can hand it
//! in-memory buffers.
//!
//! Flow:
//! 1. Optional intro banner.
//! 2. Room entries and `e`/`d`/`s` prompts until the player quits or input ends.
//! 3. Alphabetical list of collected clues.
//! 4. One accusation line, then the count and the verdict.

use log::{debug, info, warn};
use std::io::{BufRead, Write};

use crate::case::clue_set::ClueSet;
use crate::case::explorer::{Command, Explorer, RoomVisit, Step};
use crate::case::room_map::{RoomMap, Side};
use crate::case::suspect_index::SuspectIndex;
use crate::case::verdict::{evaluate, Accusation, Outcome, Verdict};
use crate::case::CaseError;
use crate::logutil::command_preview;

pub const MENU: &str = "Escolha: (e) esquerda  (d) direita  (s) sair";
pub const PROMPT: &str = "Opção: ";
pub const ACCUSE_PROMPT: &str = "Quem você acusa como culpado? (escreva o nome exato): ";

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub title: String,
    pub show_intro: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            title: "Detective Quest".to_string(),
            show_intro: true,
        }
    }
}

/// How the accusation stage ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccusationResult {
    Judged(Verdict),
    /// Blank name: rejected without a count.
    Empty,
    /// The input stream ended before a name arrived.
    Unreadable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Collected clues in alphabetical order.
    pub clues: Vec<String>,
    pub moves: usize,
    pub accusation: AccusationResult,
}

impl SessionReport {
    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.accusation {
            AccusationResult::Judged(v) => Some(v),
            _ => None,
        }
    }
}

pub fn render_visit(visit: &RoomVisit<'_>) -> String {
    let mut out = format!("\nVocê entrou na sala: {}\n", visit.name);
    match visit.clue {
        Some(clue) => out.push_str(&format!("  Pista encontrada: \"{}\"\n", clue)),
        None => out.push_str("  (Nenhuma pista nesta sala)\n"),
    }
    out
}

/// Text shown after a command has been applied.
pub fn render_step(step: &Step<'_>) -> String {
    match step {
        Step::Moved(visit) => render_visit(visit),
        Step::NoPath(Side::Left) => "Não há caminho à esquerda.\n".into(),
        Step::NoPath(Side::Right) => "Não há caminho à direita.\n".into(),
        Step::Invalid => "Opção inválida. Use e, d ou s.\n".into(),
        Step::Quit => "Exploração encerrada pelo jogador.\n".into(),
        Step::InputClosed => "Entrada inválida. Encerrando.\n".into(),
        Step::AlreadyEnded => String::new(),
    }
}

pub fn render_clue_list(clues: &ClueSet) -> String {
    let mut out = String::from("\n===== Pistas coletadas (ordem alfabética) =====\n");
    if clues.is_empty() {
        out.push_str("Nenhuma pista coletada.\n");
    } else {
        for clue in clues {
            out.push_str(&format!(" - {}\n", clue));
        }
    }
    out
}

pub fn render_verdict(verdict: &Verdict) -> String {
    let mut out = format!(
        "\nAcusado: {}\nPistas que apontam para {}: {}\n",
        verdict.accused, verdict.accused, verdict.count
    );
    match verdict.outcome {
        Outcome::Guilty => out.push_str(&format!(
            "\nVEREDICTO: Há pistas suficientes! {} é considerado culpado.\n",
            verdict.accused
        )),
        Outcome::Insufficient => out.push_str(&format!(
            "\nVEREDICTO: Pistas insuficientes. {} não pode ser acusado com segurança.\n",
            verdict.accused
        )),
    }
    out
}

/// Read one line; `None` when the stream is closed or unreadable.
fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            warn!("Failed to read player input: {}", e);
            None
        }
    }
}

/// Read the accusation line. A closed or failing stream is
/// `UnreadableAccusation`; a blank name is `EmptyAccusation`.
pub fn read_accusation<R: BufRead>(input: &mut R) -> Result<Accusation, CaseError> {
    let line = read_line(input).ok_or(CaseError::UnreadableAccusation)?;
    Accusation::parse(&line)
}

pub struct Session<'a> {
    map: &'a RoomMap,
    index: &'a SuspectIndex,
    options: SessionOptions,
}

impl<'a> Session<'a> {
    pub fn new(map: &'a RoomMap, index: &'a SuspectIndex, options: SessionOptions) -> Self {
        Self {
            map,
            index,
            options,
        }
    }

    /// Play one full session: explore, list clues, accuse.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<SessionReport, CaseError> {
        info!(
            "Session started: '{}' ({} rooms)",
            self.options.title,
            self.map.len()
        );
        if self.options.show_intro {
            writeln!(out, "=== {}: Investigação Final ===", self.options.title)?;
            writeln!(
                out,
                "Explore a mansão e colete pistas. Quando terminar, acuse o suspeito."
            )?;
        }

        let mut clues = ClueSet::new();
        let moves = self.explore(&mut clues, input, out)?;

        write!(out, "{}", render_clue_list(&clues))?;
        let accusation = self.accuse(&clues, input, out)?;

        writeln!(out, "\nObrigado por jogar {}!", self.options.title)?;
        out.flush()?;

        info!(
            "Session finished: {} clue(s), {} move(s), verdict {:?}",
            clues.len(),
            moves,
            match &accusation {
                AccusationResult::Judged(v) => Some(v.outcome),
                _ => None,
            }
        );
        Ok(SessionReport {
            clues: clues.iter().map(str::to_string).collect(),
            moves,
            accusation,
        })
    }

    fn explore<R: BufRead, W: Write>(
        &self,
        clues: &mut ClueSet,
        input: &mut R,
        out: &mut W,
    ) -> Result<usize, CaseError> {
        let mut explorer = Explorer::new(self.map, clues);
        if let Some(visit) = explorer.enter() {
            write!(out, "{}", render_visit(&visit))?;
        }
        while !explorer.is_ended() {
            write!(out, "\n{}\n{}", MENU, PROMPT)?;
            out.flush()?;
            let step = match read_line(input) {
                Some(line) => {
                    debug!("Command input: {}", command_preview(&line));
                    explorer.apply(Command::parse(&line))
                }
                None => explorer.end_of_input(),
            };
            write!(out, "{}", render_step(&step))?;
        }
        Ok(explorer.moves())
    }

    fn accuse<R: BufRead, W: Write>(
        &self,
        clues: &ClueSet,
        input: &mut R,
        out: &mut W,
    ) -> Result<AccusationResult, CaseError> {
        write!(out, "\n{}", ACCUSE_PROMPT)?;
        out.flush()?;
        match read_accusation(input) {
            Ok(accusation) => {
                let verdict = evaluate(clues, self.index, &accusation);
                write!(out, "{}", render_verdict(&verdict))?;
                Ok(AccusationResult::Judged(verdict))
            }
            Err(CaseError::UnreadableAccusation) => {
                warn!("{}", CaseError::UnreadableAccusation);
                writeln!(out, "Erro na leitura. Encerrando verificação.")?;
                Ok(AccusationResult::Unreadable)
            }
            Err(e) => {
                warn!("Accusation rejected: {}", e);
                writeln!(out, "Nenhum nome fornecido. Acusação inválida.")?;
                Ok(AccusationResult::Empty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str) -> (SessionReport, String) {
        let map = RoomMap::mansion();
        let index = crate::case::seed_loader::CaseFile::mansion().build_index();
        let session = Session::new(&map, &index, SessionOptions::default());
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let report = session.run(&mut input, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn transcript_has_intro_rooms_and_goodbye() {
        let (report, text) = play("e\ns\nDona Beatriz\n");
        assert!(text.starts_with("=== Detective Quest: Investigação Final ==="));
        assert!(text.contains("Você entrou na sala: Hall de Entrada"));
        assert!(text.contains("Você entrou na sala: Sala de Estar"));
        assert!(text.contains("Exploração encerrada pelo jogador."));
        assert!(text.contains(" - Perfume feminino caro\n"));
        assert!(text.trim_end().ends_with("Obrigado por jogar Detective Quest!"));
        assert_eq!(report.moves, 1);
        assert_eq!(report.verdict().unwrap().count, 1);
    }

    #[test]
    fn invalid_and_blocked_commands_reprompt() {
        let (report, text) = play("x\nd\ne\ns\nCarlos\n");
        assert!(text.contains("Opção inválida. Use e, d ou s."));
        assert!(text.contains("Não há caminho à esquerda."));
        assert_eq!(text.matches(MENU).count(), 4);
        assert_eq!(report.clues, vec!["Livro rasgado", "Pegada suja"]);
    }

    #[test]
    fn closed_input_ends_everything_gracefully() {
        let (report, text) = play("");
        assert!(text.contains("Entrada inválida. Encerrando."));
        assert!(text.contains("Erro na leitura. Encerrando verificação."));
        assert_eq!(report.accusation, AccusationResult::Unreadable);
        assert_eq!(report.clues, vec!["Pegada suja"]);
    }

    #[test]
    fn blank_accusation_is_rejected() {
        let (report, text) = play("s\n\n");
        assert!(text.contains("Nenhum nome fornecido. Acusação inválida."));
        assert!(!text.contains("VEREDICTO"));
        assert_eq!(report.accusation, AccusationResult::Empty);
    }

    #[test]
    fn intro_can_be_hidden() {
        let map = RoomMap::mansion();
        let index = SuspectIndex::new();
        let options = SessionOptions {
            title: "Caso".into(),
            show_intro: false,
        };
        let session = Session::new(&map, &index, options);
        let mut out = Vec::new();
        session
            .run(&mut Cursor::new("s\nNinguém\n".as_bytes().to_vec()), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nVocê entrou na sala: Hall de Entrada"));
        assert!(text.contains("Obrigado por jogar Caso!"));
    }

    #[test]
    fn accusation_reader_reports_closed_input() {
        assert!(matches!(
            read_accusation(&mut Cursor::new(Vec::new())),
            Err(CaseError::UnreadableAccusation)
        ));
        assert!(matches!(
            read_accusation(&mut Cursor::new(b"\r\n".to_vec())),
            Err(CaseError::EmptyAccusation)
        ));
        let mut input = Cursor::new("Professor Otávio\n".as_bytes().to_vec());
        let accusation = read_accusation(&mut input).unwrap();
        assert_eq!(accusation.name(), "Professor Otávio");
    }

    #[test]
    fn clue_list_notice_when_empty() {
        let text = render_clue_list(&ClueSet::new());
        assert!(text.contains("Nenhuma pista coletada."));
    }
}

use std::io::BufRead;

use crossterm::style::Stylize;
use propkb::{
    context::KnowledgeBase,
    reports::{Outcome, Report, Verdict},
    structures::clause::Clause,
};

/// A command, read from a line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'l> {
    Tell(&'l str),
    Retract(&'l str),
    Ask(&'l str),
    Validate(&'l str),
    Clauses,
    Clear,
    Skip,
}

impl<'l> Command<'l> {
    pub fn read(line: &'l str) -> Self {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line == "c" || line.starts_with("c ") {
            return Self::Skip;
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match (keyword, rest) {
            ("tell", sentence) => Self::Tell(sentence),
            ("retract", sentence) => Self::Retract(sentence),
            ("ask", sentence) => Self::Ask(sentence),
            ("validate", sentence) => Self::Validate(sentence),
            ("clauses", "") => Self::Clauses,
            ("clear", "") => Self::Clear,
            _ => Self::Tell(line),
        }
    }
}

#[derive(Default)]
pub struct SessionOptions {
    pub proof: bool,
    pub stats: bool,
}

pub struct Session {
    kb: KnowledgeBase,
    options: SessionOptions,
}

impl Session {
    pub fn new(kb: KnowledgeBase, options: SessionOptions) -> Self {
        Session { kb, options }
    }

    pub fn read(&mut self, reader: impl BufRead) -> std::io::Result<()> {
        for line in reader.lines() {
            self.process(&line?);
        }
        Ok(())
    }

    pub fn process(&mut self, line: &str) {
        match Command::read(line) {
            Command::Skip => {}

            Command::Tell(sentence) => {
                if let Err(e) = self.kb.tell_str(sentence) {
                    println!("c {} in '{sentence}': {e}", "Error".red());
                }
            }

            Command::Retract(sentence) => {
                if let Err(e) = self.kb.retract_str(sentence) {
                    println!("c {} in '{sentence}': {e}", "Error".red());
                }
            }

            Command::Ask(sentence) => match self.kb.parse(sentence) {
                Ok(query) => {
                    let outcome = self.kb.ask_report(&query);
                    println!("s {}", styled_report(outcome.report));
                    self.follow_up(&outcome);
                }
                Err(e) => println!("c {} in '{sentence}': {e}", "Error".red()),
            },

            Command::Validate(sentence) => match self.kb.validate_str(sentence) {
                Ok(verdict) => println!("s {}", styled_verdict(verdict)),
                Err(e) => println!("c {} in '{sentence}': {e}", "Error".red()),
            },

            Command::Clauses => {
                println!("c {} clauses", self.kb.clause_count());
                for clause in self.kb.clauses() {
                    println!("c   {}", clause.as_external_string(&self.kb.atom_db));
                }
            }

            Command::Clear => self.kb.clear(),
        }
    }

    fn follow_up(&self, outcome: &Outcome) {
        if self.options.proof {
            if let Some(refutation) = outcome.derivation.as_ref().and_then(|d| d.refutation()) {
                for (index, step) in refutation.iter().enumerate() {
                    println!("c {index:>4} {}", step.as_string(&self.kb.atom_db));
                }
            }
        }

        if self.options.stats {
            let counters = &outcome.counters;
            println!("c PASSES      {}", counters.passes);
            println!("c PAIRS       {}", counters.pairs);
            println!("c RESOLVENTS  {}", counters.resolvents);
            println!("c CLAUSES     {}", counters.working_clauses);
            println!("c TIME        {:.2?}", counters.time);
        }
    }
}

fn styled_report(report: Report) -> crossterm::style::StyledContent<String> {
    let text = report.to_string();
    match report {
        Report::Entailed => text.green(),
        Report::NotEntailed => text.red(),
        Report::Unknown => text.yellow(),
    }
}

fn styled_verdict(verdict: Verdict) -> crossterm::style::StyledContent<String> {
    let text = verdict.to_string();
    match verdict {
        Verdict::True => text.green(),
        Verdict::False => text.red(),
        Verdict::Undetermined => text.yellow(),
        Verdict::Inconsistent => text.magenta(),
    }
}

//! Command formatting: our side of the pipe
//!
//! Formatting is a total match over the action variants; the verbs and
//! argument order are the referee's grammar, one line per hero. Lines
//! are flushed as they are written because the referee will not echo a
//! prompt.

use std::fmt;
use std::io::Write;

use crate::arena::action::{Action, TurnCommand};
use crate::core::types::HeroClass;
use crate::core::Result;

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wait => write!(f, "WAIT"),
            Action::Move(p) => write!(f, "MOVE {} {}", p.x, p.y),
            Action::Attack(id) => write!(f, "ATTACK {}", id.0),
            Action::MoveAttack(p, id) => write!(f, "MOVE_ATTACK {} {} {}", p.x, p.y, id.0),
            Action::Fireball(p) => write!(f, "FIREBALL {} {}", p.x, p.y),
            Action::Burning(p) => write!(f, "BURNING {} {}", p.x, p.y),
            Action::Blink(p) => write!(f, "BLINK {} {}", p.x, p.y),
            Action::AoeHeal(p) => write!(f, "AOEHEAL {} {}", p.x, p.y),
            Action::Counter => write!(f, "COUNTER"),
            Action::AttackNearest(kind) => write!(f, "ATTACK_NEAREST {}", kind.token()),
        }
    }
}

impl fmt::Display for TurnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnCommand::Buy(name) => write!(f, "BUY {}", name),
            TurnCommand::Act(action) => action.fmt(f),
        }
    }
}

pub struct CommandWriter<W> {
    writer: W,
}

impl<W: Write> CommandWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Draft-phase line: the class name to pick.
    pub fn draft_line(&mut self, class: HeroClass) -> Result<()> {
        writeln!(self.writer, "{}", class.token())?;
        self.writer.flush()?;
        Ok(())
    }

    /// One command line for one hero.
    pub fn command_line(&mut self, command: &TurnCommand) -> Result<()> {
        writeln!(self.writer, "{}", command)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Test doubles for the interactive prompt and the external agent commands.

use std::{cell::RefCell, collections::VecDeque};

use inquire::{InquireError, error::InquireResult};
use switchssh_cli::Prompter;
use switchssh_core::{CommandRunner, CommandStatus, Invocation};

use crate::render::CommandOutput;

/// Replays canned answers and remembers every question asked.
#[derive(Default)]
pub(crate) struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub(crate) asked: Vec<String>,
}

impl ScriptedPrompter {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str) -> InquireResult<String> {
        self.asked.push(message.to_owned());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_owned())
            .ok_or(InquireError::OperationCanceled)
    }
}

/// Records invocations and replays queued exit codes, succeeding once the queue is drained.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    pub(crate) calls: RefCell<Vec<Invocation>>,
    codes: RefCell<VecDeque<i32>>,
}

impl RecordingRunner {
    pub(crate) fn with_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        Self {
            calls: RefCell::default(),
            codes: RefCell::new(codes.into_iter().collect()),
        }
    }
}

impl CommandRunner for &RecordingRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandStatus> {
        self.calls.borrow_mut().push(invocation.clone());
        Ok(CommandStatus {
            code: Some(self.codes.borrow_mut().pop_front().unwrap_or(0)),
        })
    }
}

pub(crate) fn invocation(program: &str, args: &[&str], interactive: bool) -> Invocation {
    Invocation {
        program: program.to_owned(),
        args: args.iter().map(|a| a.to_string()).collect(),
        interactive,
    }
}

#[track_caller]
pub(crate) fn plain(output: CommandOutput) -> String {
    match output {
        CommandOutput::Plain(text) => text,
        CommandOutput::Rejected(reason) => panic!("unexpected rejection: {reason}"),
    }
}

#[track_caller]
pub(crate) fn rejected(output: CommandOutput) -> String {
    match output {
        CommandOutput::Rejected(reason) => reason,
        CommandOutput::Plain(text) => panic!("expected a rejection, got: {text}"),
    }
}

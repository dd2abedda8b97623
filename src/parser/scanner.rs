use crate::ast::{Macro, Segment};

/// Cursor and output of a single parse call.
pub(super) struct ParserState<'a> {
    input: &'a str,
    pos: usize,
    special: char,
    segments: Vec<Segment>,
}

impl<'a> ParserState<'a> {
    pub(super) fn new(input: &'a str, special: char) -> Self {
        Self {
            input,
            pos: 0,
            special,
            segments: Vec::new(),
        }
    }

    pub(super) fn special(&self) -> char {
        self.special
    }

    /// Byte offset of the next unread character.
    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    pub(super) fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume and return the next character.
    pub(super) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub(super) fn advance(&mut self, bytes: usize) {
        self.pos += bytes;
    }

    /// Append to the trailing literal segment, starting a new one if needed.
    pub(super) fn push_literal(&mut self, ch: char) {
        if let Some(Segment::Literal(text)) = self.segments.last_mut() {
            text.push(ch);
        } else {
            self.segments.push(Segment::Literal(ch.to_string()));
        }
    }

    pub(super) fn push_macro(&mut self, name: String, arg: Option<String>) {
        self.segments.push(Segment::Macro(Macro { name, arg }));
    }

    pub(super) fn finish(self) -> Vec<Segment> {
        self.segments
    }
}

//! Character-driven hstore parser.
//!
//! The parser is a finite-state machine that consumes one character at a
//! time, with one character of lookahead (the `next` argument of
//! [`Parser::step`]) and one character of lookback (whether the previous
//! character was an unescaped backslash). Nesting is tracked with an
//! explicit stack of frames rather than recursion. The stack is capped at
//! [`DEFAULT_MAX_DEPTH`] containers unless [`Parser::with_max_depth`] says
//! otherwise, because the reducer and writer walk the finished tree
//! recursively.
//!
//! The output is an untyped [`Container`] tree: ordered key/value
//! [`Element`]s whose values are still raw text. [`crate::reduce`] turns
//! that tree into a typed [`crate::Value`].
//!
//! ## States
//!
//! | state | meaning |
//! |---|---|
//! | `Start` | outside the root container |
//! | `AwaitingFirstChar` | at the start of a key, a value or a bare element |
//! | `InKeyOrValue` | accumulating a key or value |
//! | `AfterArrow` | on the `>` of a `=>` |
//! | `AfterElement` | on the `,` or closing bracket that ends an element |
//!
//! The document is accepted when the input is exhausted in `Start` with
//! the root container closed.

use crate::{Error, Result};
use std::mem;

#[cfg(feature = "tracing")]
use tracing::{trace, warn};

/// Default cap on open containers, the implicit root of undecorated input
/// not counted.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Bracket pair that opened a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bracket {
    Curly,
    Square,
}

impl Bracket {
    fn from_open(c: char) -> Option<Bracket> {
        match c {
            '{' => Some(Bracket::Curly),
            '[' => Some(Bracket::Square),
            _ => None,
        }
    }

    #[must_use]
    pub const fn close_char(self) -> char {
        match self {
            Bracket::Curly => '}',
            Bracket::Square => ']',
        }
    }
}

/// The elements of one bracketed level, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub bracket: Bracket,
    pub elements: Vec<Element>,
}

impl Container {
    fn new(bracket: Bracket) -> Self {
        Container {
            bracket,
            elements: Vec::new(),
        }
    }
}

/// One key/value unit. `key` is `None` for array members.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub key: Option<String>,
    pub value: ElementValue,
    /// Some part of the value was read inside quotes.
    pub quoted: bool,
}

/// Raw, still-escaped text or a nested container.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementValue {
    Text(String),
    Nested(Container),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    AwaitingFirstChar,
    InKeyOrValue,
    AfterArrow,
    AfterElement,
}

/// Element under construction. The value buffer is opened by `=>`; until
/// then characters go to the key buffer.
#[derive(Debug, Default)]
struct PendingElement {
    key: Option<String>,
    value: Option<ElementValue>,
    quoted: bool,
}

impl PendingElement {
    fn push(&mut self, c: char) {
        match &mut self.value {
            Some(ElementValue::Text(text)) => text.push(c),
            // Text after a nested container is rejected in AfterElement.
            Some(ElementValue::Nested(_)) => {}
            None => self.key.get_or_insert_with(String::new).push(c),
        }
    }

    /// Trims trailing spaces off the open buffer when it is a bare token.
    fn trim_bare(&mut self) {
        if self.quoted {
            return;
        }
        let buffer = match &mut self.value {
            Some(ElementValue::Text(text)) => Some(text),
            Some(ElementValue::Nested(_)) => None,
            None => self.key.as_mut(),
        };
        if let Some(buffer) = buffer {
            let len = buffer.trim_end_matches(' ').len();
            buffer.truncate(len);
        }
    }

    /// Without `=>` the key buffer was really an array member.
    fn finish(self) -> Element {
        match self.value {
            Some(value) => Element {
                key: self.key,
                value,
                quoted: self.quoted,
            },
            None => Element {
                key: None,
                value: ElementValue::Text(self.key.unwrap_or_default()),
                quoted: self.quoted,
            },
        }
    }
}

/// Saved context of the enclosing level, one per open bracket.
#[derive(Debug)]
struct Frame {
    return_state: State,
    bracket: Bracket,
    saved_container: Option<Container>,
    saved_element: Option<PendingElement>,
}

/// The hstore state machine.
///
/// Feed it with [`Parser::step`] one character at a time, then call
/// [`Parser::finish`]. Most callers want [`crate::parse`] instead.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::parser::{ElementValue, Parser};
///
/// let root = Parser::parse_str(r#"{"a"=>1,"b"=>{2}}"#).unwrap();
/// assert_eq!(root.elements.len(), 2);
/// assert_eq!(root.elements[0].key.as_deref(), Some("a"));
/// assert!(matches!(root.elements[1].value, ElementValue::Nested(_)));
/// ```
#[derive(Debug)]
pub struct Parser {
    state: State,
    stack: Vec<Frame>,
    container: Container,
    element: Option<PendingElement>,
    quoting: bool,
    escaped: bool,
    root_closed: bool,
    position: usize,
    offset: usize,
    input_len: Option<usize>,
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Parser {
            state: State::Start,
            stack: Vec::new(),
            container: Container::new(Bracket::Curly),
            element: None,
            quoting: false,
            escaped: false,
            root_closed: false,
            position: 0,
            offset: 0,
            input_len: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the most containers that may be open at once.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.saturating_add(self.offset);
        self
    }

    /// Runs a complete document, brackets included, through a new parser.
    pub fn parse_str(input: &str) -> Result<Container> {
        let mut parser = Parser::new();
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            parser.step(c, chars.peek().copied())?;
        }
        parser.finish()
    }

    /// Parser for input of `input_len` characters that will be fed inside a
    /// synthetic `{`...`}` pair. Positions are reported against the
    /// unwrapped input.
    pub(crate) fn wrapped(input_len: usize) -> Self {
        Parser {
            offset: 1,
            input_len: Some(input_len),
            max_depth: DEFAULT_MAX_DEPTH + 1,
            ..Parser::new()
        }
    }

    /// Number of open containers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Consumes one character. `next` is the following character, if any.
    pub fn step(&mut self, c: char, next: Option<char>) -> Result<()> {
        let escaped = self.escaped;
        self.escaped = c == '\\' && !escaped;

        match self.state {
            State::Start => self.on_start(c),
            State::AwaitingFirstChar => self.on_first_char(c, escaped, next),
            State::InKeyOrValue => self.on_key_or_value(c, escaped, next),
            State::AfterArrow => {
                let element = self.element.get_or_insert_with(PendingElement::default);
                element.value = Some(ElementValue::Text(String::new()));
                element.quoted = false;
                self.state = State::AwaitingFirstChar;
                Ok(())
            }
            State::AfterElement => self.on_after_element(c),
        }?;

        self.position += 1;
        Ok(())
    }

    /// Ends the input and hands over the root container.
    pub fn finish(self) -> Result<Container> {
        if self.state != State::Start || !self.root_closed {
            let expected = match self.stack.last() {
                Some(_) if self.quoting => "a closing '\"'".to_string(),
                Some(frame) => format!("'{}'", frame.bracket.close_char()),
                None => "'{' or '['".to_string(),
            };
            return Err(Error::unexpected_eof(self.reported_position(), &expected));
        }
        Ok(self.container)
    }

    fn reported_position(&self) -> usize {
        let position = self.position.saturating_sub(self.offset);
        self.input_len.map_or(position, |len| position.min(len))
    }

    fn unexpected(&self, c: char, expected: &str) -> Error {
        Error::unexpected_token(self.reported_position(), c, expected)
    }

    fn on_start(&mut self, c: char) -> Result<()> {
        if self.root_closed {
            return if c.is_whitespace() {
                Ok(())
            } else {
                Err(self.unexpected(c, "end of input"))
            };
        }
        match Bracket::from_open(c) {
            Some(bracket) => self.push(bracket),
            None if c.is_whitespace() => Ok(()),
            None => Err(self.unexpected(c, "'{' or '['")),
        }
    }

    fn on_first_char(&mut self, c: char, escaped: bool, next: Option<char>) -> Result<()> {
        if c == ' ' && !self.quoting {
            return Ok(());
        }

        if !self.quoting && !escaped {
            if let Some(bracket) = Bracket::from_open(c) {
                return self.push(bracket);
            }
            match c {
                '}' | ']' => {
                    if self.element.is_some() {
                        return Err(self.unexpected(c, "a value after '=>'"));
                    }
                    return self.pop(c);
                }
                ',' => return Err(self.unexpected(c, "a key or value")),
                _ => {}
            }
        }

        if c == '"' && !escaped {
            self.toggle_quoting();
        } else {
            self.fill(c);
        }

        self.state = if self.at_boundary(next) {
            State::AfterElement
        } else {
            State::InKeyOrValue
        };
        Ok(())
    }

    fn on_key_or_value(&mut self, c: char, escaped: bool, next: Option<char>) -> Result<()> {
        // A quoted token may only be followed by spaces, `=>` or a separator.
        let after_quote = !self.quoting && self.element.as_ref().map_or(false, |e| e.quoted);

        if c == '"' && !escaped && !after_quote {
            self.toggle_quoting();
        } else if !self.quoting && !escaped && c == '=' && next == Some('>') {
            if self.element.as_ref().map_or(false, |e| e.value.is_some()) {
                return Err(self.unexpected(c, "',' before the next key"));
            }
            let element = self.element.get_or_insert_with(PendingElement::default);
            element.trim_bare();
            element.key.get_or_insert_with(String::new);
            self.state = State::AfterArrow;
            return Ok(());
        } else if after_quote {
            if c != ' ' {
                return Err(self.unexpected(c, "'=>', ',' or a closing bracket"));
            }
        } else {
            self.fill(c);
        }

        if self.at_boundary(next) {
            self.state = State::AfterElement;
        }
        Ok(())
    }

    fn on_after_element(&mut self, c: char) -> Result<()> {
        match c {
            ',' | '}' | ']' => {}
            ' ' => return Ok(()),
            _ => return Err(self.unexpected(c, "',' or a closing bracket")),
        }

        if let Some(mut element) = self.element.take() {
            element.trim_bare();
            let element = element.finish();
            if let Some(first) = self.container.elements.first() {
                if first.key.is_some() != element.key.is_some() {
                    return Err(self.unexpected(c, "keyed and bare elements not to be mixed"));
                }
            }
            self.container.elements.push(element);
        }

        if c == ',' {
            self.state = State::AwaitingFirstChar;
            Ok(())
        } else {
            self.pop(c)
        }
    }

    /// Lookahead check: the current token ends before `next`.
    fn at_boundary(&self, next: Option<char>) -> bool {
        !self.quoting && !self.escaped && matches!(next, Some(',' | '}' | ']'))
    }

    fn toggle_quoting(&mut self) {
        self.quoting = !self.quoting;
        if self.quoting {
            self.element
                .get_or_insert_with(PendingElement::default)
                .quoted = true;
        }
    }

    fn fill(&mut self, c: char) {
        let quoting = self.quoting;
        let element = self.element.get_or_insert_with(PendingElement::default);
        element.push(c);
        if quoting {
            element.quoted = true;
        }
    }

    fn push(&mut self, bracket: Bracket) -> Result<()> {
        if self.stack.len() >= self.max_depth {
            let limit = self.max_depth - self.offset;
            #[cfg(feature = "tracing")]
            warn!(limit, position = self.position, "Nesting depth limit exceeded");
            return Err(Error::depth_limit_exceeded(self.reported_position(), limit));
        }

        #[cfg(feature = "tracing")]
        trace!(depth = self.stack.len(), ?bracket, position = self.position, "push frame");

        let is_root = self.state == State::Start;
        let enclosing = mem::replace(&mut self.container, Container::new(bracket));
        self.stack.push(Frame {
            return_state: self.state,
            bracket,
            saved_container: if is_root { None } else { Some(enclosing) },
            saved_element: self.element.take(),
        });
        self.state = State::AwaitingFirstChar;
        Ok(())
    }

    fn pop(&mut self, c: char) -> Result<()> {
        let frame = self
            .stack
            .pop()
            .ok_or_else(|| self.unexpected(c, "an open container"))?;

        let expected = frame.bracket.close_char();
        if expected != c {
            return Err(Error::bracket_mismatch(self.reported_position(), expected, c));
        }

        #[cfg(feature = "tracing")]
        trace!(depth = self.stack.len(), position = self.position, "pop frame");

        match frame.saved_container {
            Some(enclosing) => {
                let inner = mem::replace(&mut self.container, enclosing);
                let mut element = frame.saved_element.unwrap_or_default();
                element.value = Some(ElementValue::Nested(inner));
                self.element = Some(element);
                self.state = State::AfterElement;
            }
            None => {
                self.state = frame.return_state;
                self.root_closed = true;
            }
        }
        Ok(())
    }
}

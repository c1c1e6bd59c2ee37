// Text that types itself out.
// `TitleTyper` drives the rotating headline: type a title, hold, erase,
// move to the next one. `MessageTyper` reveals the contact confirmation one
// character at a time. Both are pure state machines, the DOM side lives in
// `page.rs`.

pub const TITLES: [&str; 4] = ["Developer", "Designer", "Tech Enthusiast", "Student"];

pub const TYPING_MS: i32 = 80;
pub const ERASING_MS: i32 = 40;
pub const HOLD_MS: i32 = 1200;
pub const NEXT_TITLE_MS: i32 = 220;

pub const CONFIRMATION: &str = "Message sent! (Demo only)";
pub const REVEAL_MS: i32 = 40;
pub const CONFIRMATION_HOLD_MS: i32 = 1800;

/// What to show after one tick, and how long to wait before the next.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeStep {
    /// `None` when the visible text does not change this tick.
    pub text: Option<String>,
    pub delay_ms: i32,
}

#[derive(Clone, Debug)]
pub struct TitleTyper {
    titles: Vec<Vec<char>>,
    index: usize,
    chars: usize,
    typing: bool,
}

impl Default for TitleTyper {
    fn default() -> Self {
        TitleTyper::new(&TITLES)
    }
}

impl TitleTyper {
    pub fn new(titles: &[&str]) -> Self {
        TitleTyper {
            titles: titles.iter().map(|t| t.chars().collect()).collect(),
            index: 0,
            chars: 0,
            typing: true,
        }
    }

    pub fn current_title(&self) -> String {
        self.titles
            .get(self.index)
            .map(|t| t.iter().collect())
            .unwrap_or_default()
    }

    fn prefix(&self, len: usize) -> String {
        self.titles[self.index][..len].iter().collect()
    }

    pub fn tick(&mut self) -> TypeStep {
        if self.titles.is_empty() {
            return TypeStep {
                text: None,
                delay_ms: HOLD_MS,
            };
        }
        let len = self.titles[self.index].len();
        if self.typing {
            if self.chars <= len {
                let text = self.prefix(self.chars);
                self.chars += 1;
                TypeStep {
                    text: Some(text),
                    delay_ms: TYPING_MS,
                }
            } else {
                self.typing = false;
                TypeStep {
                    text: None,
                    delay_ms: HOLD_MS,
                }
            }
        } else if self.chars > 0 {
            // chars can sit one past the end after typing finished
            self.chars -= 1;
            let text = self.prefix(self.chars.min(len));
            TypeStep {
                text: Some(text),
                delay_ms: ERASING_MS,
            }
        } else {
            self.index = (self.index + 1) % self.titles.len();
            self.typing = true;
            TypeStep {
                text: None,
                delay_ms: NEXT_TITLE_MS,
            }
        }
    }
}

/// Yields growing prefixes of a message, one character longer each time.
#[derive(Clone, Debug)]
pub struct MessageTyper {
    chars: Vec<char>,
    shown: usize,
}

impl MessageTyper {
    pub fn new(message: &str) -> Self {
        MessageTyper {
            chars: message.chars().collect(),
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

impl Iterator for MessageTyper {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

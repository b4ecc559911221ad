/// First `chars` characters of `text`, never splitting a code point.
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// One-shot typing of a fixed text, restarted each time it is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypingRun {
    total: usize,
    typed: usize,
    running: bool,
}

impl TypingRun {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn typed(&self) -> usize {
        self.typed
    }

    /// Starts over from an empty line.
    pub fn start(&mut self) {
        self.typed = 0;
        self.running = true;
    }

    /// Stops and clears what was typed.
    pub fn stop(&mut self) {
        self.typed = 0;
        self.running = false;
    }

    /// Types one more character. Returns `false` once there is nothing left.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.typed >= self.total {
            return false;
        }
        self.typed += 1;
        true
    }
}

/// Timings for a looping type-and-delete heading, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterSpeed {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl TypewriterSpeed {
    pub const HERO: TypewriterSpeed = TypewriterSpeed {
        type_ms: 120,
        delete_ms: 80,
        hold_ms: 1500,
    };
}

/// Cycles through `words`, typing each one out, holding it, then deleting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    words: &'static [&'static str],
    speed: TypewriterSpeed,
    word: usize,
    chars: usize,
    deleting: bool,
    next_delay: u32,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str], speed: TypewriterSpeed) -> Self {
        Self {
            words,
            speed,
            word: 0,
            chars: 0,
            deleting: false,
            next_delay: speed.type_ms,
        }
    }

    fn current(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or("")
    }

    pub fn text(&self) -> &'static str {
        typed_prefix(self.current(), self.chars)
    }

    /// Milliseconds to wait before the next [`step`](Self::step).
    pub fn next_delay(&self) -> u32 {
        self.next_delay
    }

    pub fn step(&mut self) {
        let len = self.current().chars().count();
        if len == 0 {
            self.next_delay = self.speed.hold_ms;
            return;
        }
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            if self.chars == 0 {
                self.deleting = false;
                self.word = (self.word + 1) % self.words.len();
                self.next_delay = self.speed.type_ms;
            } else {
                self.next_delay = self.speed.delete_ms;
            }
        } else {
            self.chars = (self.chars + 1).min(len);
            if self.chars == len {
                self.deleting = true;
                self.next_delay = self.speed.hold_ms;
            } else {
                self.next_delay = self.speed.type_ms;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["Hi", "नमस्ते"];

    #[test]
    fn prefix_respects_char_boundaries() {
        assert_eq!(typed_prefix("नमस्ते", 2), "नम");
        assert_eq!(typed_prefix("abc", 0), "");
        assert_eq!(typed_prefix("abc", 10), "abc");
    }

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut tw = Typewriter::new(WORDS, TypewriterSpeed::HERO);
        assert_eq!(tw.text(), "");

        tw.step();
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.next_delay(), 120);

        tw.step();
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.next_delay(), 1500);

        tw.step();
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.next_delay(), 80);

        tw.step();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.next_delay(), 120);

        tw.step();
        assert_eq!(tw.text(), "न");
    }

    #[test]
    fn loops_back_to_first_word() {
        let mut tw = Typewriter::new(WORDS, TypewriterSpeed::HERO);
        let cycle = 2 * 2 + 2 * "नमस्ते".chars().count();
        for _ in 0..cycle {
            tw.step();
        }
        tw.step();
        assert_eq!(tw.text(), "H");
    }

    #[test]
    fn empty_word_list_just_waits() {
        let mut tw = Typewriter::new(&[], TypewriterSpeed::HERO);
        tw.step();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.next_delay(), 1500);
    }

    #[test]
    fn typing_run_stops_at_the_end() {
        let mut run = TypingRun::new(3);
        assert!(!run.tick());
        run.start();
        assert!(run.tick() && run.tick() && run.tick());
        assert!(!run.tick());
        assert_eq!(run.typed(), 3);
    }

    #[test]
    fn typing_run_clears_on_stop_and_restarts_from_zero() {
        let mut run = TypingRun::new(5);
        run.start();
        run.tick();
        run.tick();
        run.stop();
        assert_eq!(run.typed(), 0);
        assert!(!run.tick());

        run.start();
        assert_eq!(run.typed(), 0);
        run.tick();
        assert_eq!(run.typed(), 1);
    }
}

//! Scroll and timer driven animations: counters, typing text, header state,
//! reveal staggering.

use crate::config::TypingConfig;

/// Parse a `data-count` attribute the lenient way: leading digits only.
#[must_use]
pub fn parse_count(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u32,
    pub done: bool,
}

/// Counts up to a target over a fixed duration, one step per animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u32, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        Self {
            target,
            step: f64::from(target) / frames,
            current: 0.0,
        }
    }

    pub fn advance(&mut self) -> CounterFrame {
        self.current += self.step;
        let target = f64::from(self.target);
        if self.current < target {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let value = self.current.ceil() as u32;
            CounterFrame { value, done: false }
        } else {
            self.current = target;
            CounterFrame {
                value: self.target,
                done: true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Types each text out, holds it, deletes it, then moves to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    cfg: TypingConfig,
    text_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    #[must_use]
    pub fn new(cfg: &TypingConfig) -> Self {
        Self {
            texts: cfg
                .texts
                .iter()
                .filter(|t| !t.is_empty())
                .map(|t| t.chars().collect())
                .collect(),
            cfg: cfg.clone(),
            text_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    #[must_use]
    pub const fn start_delay_ms(&self) -> u32 {
        self.cfg.start_ms
    }

    /// Produce the next visible text and the delay before the following step.
    /// Returns `None` when there is nothing to type.
    pub fn step(&mut self) -> Option<TypeStep> {
        let current = self.texts.get(self.text_index)?;
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(current.len());
        }
        let text: String = current[..self.char_index].iter().collect();

        let delay_ms = if !self.deleting && self.char_index == current.len() {
            self.deleting = true;
            self.cfg.hold_ms
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            self.cfg.pause_ms
        } else if self.deleting {
            self.cfg.delete_ms
        } else {
            self.cfg.type_ms
        };
        Some(TypeStep { text, delay_ms })
    }
}

#[must_use]
pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Fraction of the page scrolled, clamped to `0.0..=1.0`.
#[must_use]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[must_use]
pub fn reveal_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_takes_leading_digits() {
        assert_eq!(parse_count("150"), Some(150));
        assert_eq!(parse_count(" 98%"), Some(98));
        assert_eq!(parse_count("many"), None);
    }

    #[test]
    fn counter_ends_exactly_on_target() {
        let mut counter = CounterAnimation::new(100, 2000, 16);
        let mut frames = Vec::new();
        loop {
            let frame = counter.advance();
            frames.push(frame.value);
            if frame.done {
                break;
            }
        }
        assert_eq!(frames.last(), Some(&100));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!((125..=126).contains(&frames.len()));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0, 2000, 16);
        assert_eq!(
            counter.advance(),
            CounterFrame {
                value: 0,
                done: true
            }
        );
    }

    #[test]
    fn typewriter_cycles_through_texts() {
        let cfg = TypingConfig {
            texts: vec!["ab".into(), "Я".into()],
            ..TypingConfig::default()
        };
        let mut tw = Typewriter::new(&cfg);
        let steps: Vec<(String, u32)> = (0..7)
            .map(|_| {
                let s = tw.step().unwrap();
                (s.text, s.delay_ms)
            })
            .collect();
        assert_eq!(
            steps,
            vec![
                ("a".into(), cfg.type_ms),
                ("ab".into(), cfg.hold_ms),
                ("a".into(), cfg.delete_ms),
                (String::new(), cfg.pause_ms),
                ("Я".into(), cfg.hold_ms),
                (String::new(), cfg.pause_ms),
                ("a".into(), cfg.type_ms),
            ]
        );
    }

    #[test]
    fn typewriter_without_texts_is_idle() {
        let cfg = TypingConfig {
            texts: vec![String::new()],
            ..TypingConfig::default()
        };
        assert_eq!(Typewriter::new(&cfg).step(), None);
    }

    #[test]
    fn scroll_helpers() {
        assert!(!header_scrolled(100.0, 100.0));
        assert!(header_scrolled(101.0, 100.0));
        assert!((scroll_progress(500.0, 2000.0, 1000.0) - 0.5).abs() < 1e-9);
        assert!(scroll_progress(10.0, 500.0, 800.0).abs() < 1e-9);
        assert_eq!(reveal_delay_ms(3, 100), 300);
    }
}

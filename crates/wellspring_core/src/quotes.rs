//! Motivational quotes, rotated by day of year.

use std::borrow::Cow;

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::date_math::day_of_year;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: Cow<'static, str>,
    pub author: Cow<'static, str>,
}

impl Quote {
    pub const fn from_static(text: &'static str, author: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            author: Cow::Borrowed(author),
        }
    }

    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
            author: Cow::Owned(author.into()),
        }
    }
}

// Order matters: it defines which quote each day of the year gets.
static BUILTIN_QUOTES: [Quote; 15] = [
    Quote::from_static(
        "The secret of getting ahead is getting started.",
        "Mark Twain",
    ),
    Quote::from_static(
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    Quote::from_static(
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
    ),
    Quote::from_static(
        "Don't watch the clock; do what it does. Keep going.",
        "Sam Levenson",
    ),
    Quote::from_static(
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    Quote::from_static("Your health is an investment, not an expense.", "Anonymous"),
    Quote::from_static(
        "Take care of your body. It's the only place you have to live.",
        "Jim Rohn",
    ),
    Quote::from_static(
        "Small daily improvements are the key to staggering long-term results.",
        "Anonymous",
    ),
    Quote::from_static(
        "You don't have to be great to start, but you have to start to be great.",
        "Zig Ziglar",
    ),
    Quote::from_static(
        "The future depends on what you do today.",
        "Mahatma Gandhi",
    ),
    Quote::from_static(
        "Study hard what interests you the most in the most undisciplined, irreverent and original manner possible.",
        "Richard Feynman",
    ),
    Quote::from_static(
        "Education is the passport to the future, for tomorrow belongs to those who prepare for it today.",
        "Malcolm X",
    ),
    Quote::from_static("Hydration is the foundation of health.", "Anonymous"),
    Quote::from_static(
        "Your body hears everything your mind says. Stay positive.",
        "Naomi Judd",
    ),
    Quote::from_static("The groundwork of all happiness is health.", "Leigh Hunt"),
];

pub fn builtin_quotes() -> &'static [Quote] {
    &BUILTIN_QUOTES
}

/// The quote for `today`: index `day_of_year(today) % quotes.len()`.
///
/// The same date and list always give the same quote. Returns `None` only for
/// an empty list.
pub fn daily_quote(quotes: &[Quote], today: NaiveDate) -> Option<&Quote> {
    if quotes.is_empty() {
        return None;
    }
    let index = day_of_year(today) as usize % quotes.len();
    quotes.get(index)
}

/// A uniformly random quote, for "show me another one".
pub fn random_quote<'a, R: Rng + ?Sized>(quotes: &'a [Quote], rng: &mut R) -> Option<&'a Quote> {
    quotes.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_quote_uses_one_based_day_of_year() {
        let quotes = builtin_quotes();
        // 1 January is day 1, so it gets the second quote
        assert_eq!(daily_quote(quotes, date(2025, 1, 1)), Some(&quotes[1]));
        // day 15 wraps to the first quote
        assert_eq!(daily_quote(quotes, date(2025, 1, 15)), Some(&quotes[0]));
        assert_eq!(daily_quote(quotes, date(2025, 1, 14)), Some(&quotes[14]));
    }

    #[test]
    fn daily_quote_is_idempotent() {
        let quotes = builtin_quotes();
        let day = date(2025, 8, 9);
        assert_eq!(daily_quote(quotes, day), daily_quote(quotes, day));
    }

    #[test]
    fn same_calendar_day_a_year_later_repeats() {
        let quotes = builtin_quotes();

        // 365 days apart across a common year
        let a = date(2025, 3, 1);
        let b = a.checked_add_days(Days::new(365)).unwrap();
        assert_eq!(b, date(2026, 3, 1));
        assert_eq!(daily_quote(quotes, a), daily_quote(quotes, b));

        // 366 days apart across a leap day
        let c = date(2024, 1, 10);
        let d = c.checked_add_days(Days::new(366)).unwrap();
        assert_eq!(d, date(2025, 1, 10));
        assert_eq!(daily_quote(quotes, c), daily_quote(quotes, d));
    }

    #[test]
    fn custom_lists_rotate_by_their_own_length() {
        let quotes = vec![Quote::new("a", "x"), Quote::new("b", "y")];
        assert_eq!(daily_quote(&quotes, date(2025, 1, 1)).unwrap().text, "b");
        assert_eq!(daily_quote(&quotes, date(2025, 1, 2)).unwrap().text, "a");
    }

    #[test]
    fn empty_list_has_no_quote() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(daily_quote(&[], date(2025, 1, 1)).is_none());
        assert!(random_quote(&[], &mut rng).is_none());
    }

    #[test]
    fn random_quote_comes_from_the_list() {
        let quotes = builtin_quotes();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let quote = random_quote(quotes, &mut rng).unwrap();
            assert!(quotes.contains(quote));
        }
    }
}

//! Rotating quotes shown on the home page.

use std::time::Duration;

/// How long each quote stays up.
pub const QUOTE_ROTATION_PERIOD: Duration = Duration::from_secs(6);

pub const QUOTES: [&str; 20] = [
    "The two most important days in your life are the day you are born and the day you find out why. – Mark Twain",
    "Life is not measured by the number of breaths we take, but by the moments that take our breath away. – Maya Angelou",
    "Your time is limited, so don't waste it living someone else's life. – Steve Jobs",
    "Life is what happens when you're busy making other plans. – John Lennon",
    "In the end, it's not the years in your life that count. It's the life in your years. – Abraham Lincoln",
    "The purpose of our lives is to be happy. – Dalai Lama",
    "Life is short, and it is up to you to make it sweet. – Sarah Louise Delany",
    "Get busy living or get busy dying. – Stephen King",
    "Life is a long lesson in humility. – James M. Barrie",
    "The unexamined life is not worth living. – Socrates",
    "Life is a succession of lessons which must be lived to be understood. – Helen Keller",
    "Don't count the days, make the days count. – Muhammad Ali",
    "Life shrinks or expands in proportion to one's courage. – Anaïs Nin",
    "The only way to do great work is to love what you do. – Steve Jobs",
    "Everything you’ve ever wanted is on the other side of fear. – George Addair",
    "You only live once, but if you do it right, once is enough. – Mae West",
    "Life is a journey, not a destination. – Ralph Waldo Emerson",
    "To live is the rarest thing in the world. Most people exist, that is all. – Oscar Wilde",
    "Be where you are; otherwise you will miss your life. – Buddha",
    "The secret of life, though, is to fall seven times and to get up eight times. – Paulo Coelho",
];

/// Quote for a rotation index; wraps around.
pub fn quote_at(index: usize) -> &'static str {
    QUOTES[index % QUOTES.len()]
}

/// Index that follows `index`.
pub fn next_quote_index(index: usize) -> usize {
    (index + 1) % QUOTES.len()
}

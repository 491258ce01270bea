//! Quote of the day.

use rand::seq::SliceRandom;
use rand::Rng;

pub const QUOTES: &[&str] = &[
    "The secret of getting ahead is getting started. - Mark Twain",
    "It always seems impossible until it's done. - Nelson Mandela",
    "Don't watch the clock; do what it does. Keep going. - Sam Levenson",
    "Success is the sum of small efforts, repeated day in and day out. - Robert Collier",
    "The expert in anything was once a beginner. - Helen Hayes",
    "You don't have to be great to start, but you have to start to be great. - Zig Ziglar",
    "Learning never exhausts the mind. - Leonardo da Vinci",
    "Education is the most powerful weapon which you can use to change the world. - Nelson Mandela",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
    "Strive for progress, not perfection.",
];

/// Draw one quote uniformly at random
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // QUOTES is a non-empty constant
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

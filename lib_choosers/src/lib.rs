mod random_chooser;
mod seeded_chooser;
mod util;

pub use random_chooser::RandomChooser;
pub use seeded_chooser::SeededChooser;

pub mod xml;

pub use xml::render_quiz;

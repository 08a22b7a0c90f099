mod albums;
mod login;
mod people;
mod photos;
mod places;
mod settings;

pub use self::{albums::*, login::*, people::*, photos::*, places::*, settings::*};

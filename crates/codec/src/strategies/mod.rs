mod manchester;
mod nrz;
mod nrzi;

pub use manchester::{manchester_decode, manchester_encode, Manchester};
pub use nrz::{nrz_decode, nrz_encode, Nrz};
pub use nrzi::{nrzi_decode, nrzi_encode, Nrzi};

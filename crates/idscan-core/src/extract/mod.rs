//! Field extraction from recognized document text.
//!
//! Every extractor is a pure function of the text: it never fails and
//! reports fields it could not find as `None`.

mod id_card;
pub mod mrz;
mod passport;
mod plate;
pub mod rules;
mod voter_card;

pub use id_card::{extract_id_card, IdCardFields};
pub use mrz::{decode_mrz, decode_mrz_date, find_mrz, MrzFields};
pub use passport::{extract_passport, PassportFields};
pub use plate::{extract_chassis, extract_plate, extract_plate_and_chassis};
pub use rules::{province_name, provinces, FallbackChain, Rule};
pub use voter_card::{extract_voter_card, VoterCardFields};

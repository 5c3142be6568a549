pub mod cipher;
pub mod group;
pub mod label;
pub mod rand_aes;

pub use crate::{
    cipher::crypt_row,
    group::{DhGroup, RFC5114_GROUP},
    label::Label,
    rand_aes::AesRng,
};

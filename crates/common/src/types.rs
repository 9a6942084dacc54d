use serde::Serialize;

/// Fixed greeting served at the root path.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
}

/// Fixed confirmation body returned by delete routes.
#[derive(Serialize, Debug)]
pub struct Confirmation {
    pub message: String,
}

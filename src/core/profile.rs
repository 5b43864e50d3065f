use crate::core::node::find_input;
use crate::core::step::Step;
use crate::number_input::{GOLD_RECORD_CAP, GOLD_RECORD_UNIT};
use serde::Serialize;

/// The collected form values. Unset fields stay as empty strings.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub top_rapper: String,
    pub rap_name: String,
    pub album_sales: u64,
    pub gold_records: u64,
    pub email: String,
    pub job: String,
    pub top_album: String,
    pub country: String,
    pub start_date: String,
}

impl Profile {
    pub fn from_step(step: &Step) -> Self {
        let value = |id: &str| {
            find_input(&step.nodes, id)
                .map(|input| input.value())
                .unwrap_or_default()
        };

        let album_sales = value("album_sales").parse::<u64>().unwrap_or(0);

        Self {
            top_rapper: value("top_rapper"),
            rap_name: value("rap_name"),
            album_sales,
            gold_records: (album_sales / GOLD_RECORD_UNIT).min(GOLD_RECORD_CAP),
            email: value("email"),
            job: value("job"),
            top_album: value("top_album"),
            country: value("country"),
            start_date: value("start_date"),
        }
    }
}

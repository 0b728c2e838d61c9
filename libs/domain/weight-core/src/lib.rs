mod classify;
mod container;
mod direction;
mod errors;
mod na;
mod sequence;
mod units;
mod window;

pub use classify::{classify_item, ItemKind};
pub use container::{parse_container_list, validate_container_id, validate_container_ids};
pub use direction::{parse_direction_filter, Direction};
pub use errors::WeightCoreError;
pub use na::NaInt;
pub use sequence::{can_compute_out_weights, SequenceError};
pub use units::{
    calculate_net_weight, calculate_truck_tara, kg_to_lbs, lbs_to_kg, normalize_to_kg,
    validate_weight_kg, Unit, WEIGHT_CEILING_KG,
};
pub use window::{format_timestamp, parse_timestamp, resolve_window, TimeWindow};

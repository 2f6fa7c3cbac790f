//! # Picking
//!
//! 倉儲揀貨波次模型：訂單、揀貨員、物料與揀貨記錄，以及候選解驗證

pub use picking_calc::{
    BatchValidator, InstanceValidation, PickingTally, RunnerLoad, ValidationError, Validator,
    WaveSelection, WaveSummary,
};
pub use picking_core::{
    EntityKind, Instance, Item, Order, Picking, PickingError, Runner, ValidationConfig,
    WaveBoundsScope,
};

//! Items referenced by the code `#[derive(Record)]` generates.
//!
//! Not public API.

/// Static registration of `#[record(auto_register)]` types.
#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::RecordRegistry;

    /// A registration function submitted by the derive.
    pub struct __AutoRegisterFunc(pub fn(&mut RecordRegistry));

    inventory::collect!(__AutoRegisterFunc);

    // Only runs where `inventory` works, which is how support is detected.
    inventory::submit! {
        __AutoRegisterFunc(RecordRegistry::mark_auto_registered)
    }

    pub(crate) fn register_types(registry: &mut RecordRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}

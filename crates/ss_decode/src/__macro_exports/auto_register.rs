pub use inventory;

use crate::Decodable;
use crate::registry::DecoderRegistry;

/// Sentinel submitted like any derived type; finding it in a registry
/// proves that `inventory` collected the submissions on this platform.
#[derive(crate::Decode)]
pub enum __AvailFlag {
    Available,
}

pub struct __AutoRegisterFunc(pub fn(&mut DecoderRegistry));

inventory::collect!(__AutoRegisterFunc);

pub trait __RegisterType {
    fn __register(registry: &mut DecoderRegistry);
}

impl<T: Decodable> __RegisterType for T {
    #[inline]
    fn __register(registry: &mut DecoderRegistry) {
        registry.register::<T>();
    }
}

pub fn __register_types(registry: &mut DecoderRegistry) {
    for func in inventory::iter::<__AutoRegisterFunc> {
        (func.0)(registry);
    }
}

use fastview::{BinderConfig, ViewBinder};

use crate::{make_fast_buffer, HostError, HostValue, MAKE_FAST_BUFFER};

pub type HostFn =
    for<'v, 'b> fn(&ViewBinder, Vec<HostValue<'v, 'b>>) -> Result<HostValue<'v, 'b>, HostError>;

/// The named exports a host sees after loading this module.
#[derive(Debug, Clone, Default, derive_new::new)]
pub struct Module {
    binder: ViewBinder,
}

impl Module {
    const EXPORTS: &'static [(&'static str, HostFn)] =
        &[(MAKE_FAST_BUFFER, make_fast_buffer as HostFn)];

    pub fn with_config(config: BinderConfig) -> Self {
        Self::new(ViewBinder::new(config))
    }

    pub fn exports(&self) -> impl Iterator<Item = &'static str> {
        Self::EXPORTS.iter().map(|(name, _)| *name)
    }

    pub fn call<'v, 'b>(
        &self,
        name: &str,
        args: Vec<HostValue<'v, 'b>>,
    ) -> Result<HostValue<'v, 'b>, HostError> {
        let (_, f) = Self::EXPORTS
            .iter()
            .find(|(export, _)| *export == name)
            .ok_or_else(|| HostError::InvalidArgument(format!("No export named {}", name)))?;
        f(&self.binder, args)
    }
}

use std::sync::OnceLock;

#[cfg(not(all(feature = "gecko", target_os = "windows")))]
use gecko_control::DisabledControl;
use gecko_control::Control;
#[cfg(all(feature = "gecko", target_os = "windows"))]
use gecko_control::GeckoControl;

type ControlFactory = Box<dyn Fn() -> Box<dyn Control> + Send + Sync>;

static CONTROL_FACTORY: OnceLock<ControlFactory> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
#[error("A control factory is already installed.")]
pub struct FactoryAlreadyInstalled;

/// Replaces the built-in engine backend. Has to happen before the first
/// `MozillaBrowser` is constructed and can only happen once.
pub fn set_control_factory<F>(factory: F) -> Result<(), FactoryAlreadyInstalled>
where
    F: Fn() -> Box<dyn Control> + Send + Sync + 'static,
{
    CONTROL_FACTORY
        .set(Box::new(factory))
        .map_err(|_| FactoryAlreadyInstalled)
}

pub(crate) fn new_control() -> Box<dyn Control> {
    match CONTROL_FACTORY.get() {
        Some(factory) => factory(),
        None => default_control(),
    }
}

#[cfg(all(feature = "gecko", target_os = "windows"))]
fn default_control() -> Box<dyn Control> {
    Box::new(GeckoControl::new())
}

#[cfg(not(all(feature = "gecko", target_os = "windows")))]
fn default_control() -> Box<dyn Control> {
    Box::new(DisabledControl::new())
}

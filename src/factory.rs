use alloc::boxed::Box;
use tracing::debug;

use crate::{
    arguments::CallArguments,
    errors::InstantiateErrorKind,
    service::{service_fn, BoxCloneService},
    utils::sharing::{AnyShared, SendBound, Shared, SyncBound},
};

/// The real construction routine of a callable. It receives the original
/// pre-binding call arguments, never the bound form.
pub(crate) trait Factory: Clone + 'static {
    type Provides: 'static;
    type Error: Into<InstantiateErrorKind>;

    fn construct(&mut self, arguments: CallArguments) -> Result<Self::Provides, Self::Error>;
}

impl<F, Instance, Err> Factory for F
where
    F: FnMut(CallArguments) -> Result<Instance, Err> + Clone + 'static,
    Instance: 'static,
    Err: Into<InstantiateErrorKind>,
{
    type Provides = Instance;
    type Error = Err;

    #[inline]
    fn construct(&mut self, arguments: CallArguments) -> Result<Instance, Err> {
        self(arguments)
    }
}

pub(crate) type BoxedCloneFactory = BoxCloneService<CallArguments, AnyShared, InstantiateErrorKind>;

#[must_use]
pub(crate) fn boxed_factory<Fac>(factory: Fac) -> BoxedCloneFactory
where
    Fac: Factory + SendBound + SyncBound,
    Fac::Provides: SendBound + SyncBound,
{
    BoxCloneService(Box::new(service_fn(move |arguments| {
        match factory.clone().construct(arguments) {
            Ok(instance) => {
                debug!("Constructed");
                Ok(Shared::new(instance) as AnyShared)
            }
            Err(err) => Err(err.into()),
        }
    })))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{boxed_factory, CallArguments, InstantiateErrorKind};
    use crate::service::Service as _;

    struct Widget(CallArguments);

    #[test]
    fn test_boxed_factory_downcasts() {
        let mut factory = boxed_factory(|arguments: CallArguments| Ok::<_, InstantiateErrorKind>(Widget(arguments)));

        let arguments = call_args![1, "test"];
        let instance = factory.call(arguments.clone()).unwrap();
        let widget = instance.downcast::<Widget>().unwrap();

        assert_eq!(widget.0, arguments);
    }
}

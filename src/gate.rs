use alloc::collections::BTreeMap;
use core::any::TypeId;
use parking_lot::Mutex;
use tracing::{debug, error, info_span};

use crate::{
    arguments::CallArguments,
    descriptor::{ClassDescriptor, ClassId, ClassSpec},
    errors::{ConstructErrorKind, DefinitionErrorKind},
    service::Service as _,
    utils::sharing::{AnyShared, SendBound, Shared, SyncBound},
};

/// The construction call surface: an explicit side table from class id to
/// class descriptor, and the lookup-or-create orchestration over each
/// descriptor's instance registry.
///
/// Handles are cheap clones of the same side table; with the `thread_safe`
/// feature they can be shared across threads and lookup-and-insert is a
/// critical section per class.
#[derive(Clone, Default)]
pub struct ConstructionGate {
    inner: Shared<GateInner>,
}

#[derive(Default)]
struct GateInner {
    classes: Mutex<BTreeMap<ClassId, Shared<ClassDescriptor>>>,
}

impl ConstructionGate {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a class spec and registers it, handing out its id.
    ///
    /// A rejected spec leaves no trace in the gate.
    ///
    /// # Errors
    /// - Returns [`DefinitionErrorKind::MissingConfiguration`] if the spec declares
    ///   no bind target
    /// - Returns [`DefinitionErrorKind::InvalidBindTarget`] if the declared bind
    ///   target doesn't resolve to a callable of the class or an ancestor
    /// - Returns [`DefinitionErrorKind::UnknownParent`] if the declared parent id
    ///   wasn't issued by this gate
    pub fn register(&self, spec: ClassSpec) -> Result<ClassId, DefinitionErrorKind> {
        let span = info_span!("register", class = %spec.name);
        let _guard = span.enter();

        let mut classes = self.inner.classes.lock();

        let parent = match spec.parent {
            Some(parent_id) => match classes.get(&parent_id) {
                Some(descriptor) => Some(descriptor.clone()),
                None => {
                    let err = DefinitionErrorKind::UnknownParent { class: spec.name };
                    error!("{}", err);
                    return Err(err);
                }
            },
            None => None,
        };

        let descriptor = match ClassDescriptor::validate(spec, parent) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                error!("{}", err);
                return Err(err);
            }
        };

        let id = ClassId(classes.len() as u64);
        classes.insert(id, Shared::new(descriptor));
        debug!("Class registered");

        Ok(id)
    }

    /// Returns the shared instance for the class and the canonical key of
    /// the given arguments, constructing it on first request.
    ///
    /// Equal argument sets share one instance however they're spelled
    /// (positional vs keyword, defaults explicit or omitted); the
    /// construction routine runs at most once per distinct key and receives
    /// the original pre-binding arguments.
    ///
    /// # Errors
    /// - Returns [`ConstructErrorKind::NoClass`] for an id this gate didn't issue
    /// - Returns [`ConstructErrorKind::Bind`] if the arguments don't bind against
    ///   the class's bind-target signature
    /// - Returns [`ConstructErrorKind::Key`] if a bound value can't be
    ///   canonicalized
    /// - Returns [`ConstructErrorKind::Factory`] if the construction routine
    ///   fails; no registry entry is left behind
    pub fn construct(&self, class: ClassId, arguments: CallArguments) -> Result<AnyShared, ConstructErrorKind> {
        let Some(descriptor) = self.inner.classes.lock().get(&class).cloned() else {
            let err = ConstructErrorKind::NoClass;
            error!("{}", err);
            return Err(err);
        };

        let span = info_span!("construct", class = %descriptor.name);
        let _guard = span.enter();

        // Degenerate nullary-signature case: once populated, the cached
        // instance answers every request, whatever arguments came in
        if descriptor.singleton {
            if let Some(instance) = descriptor.registry.single() {
                debug!("Reusing singleton instance");
                return Ok(instance);
            }
        }

        let bound = match descriptor.bind.signature.bind(&arguments) {
            Ok(bound) => bound,
            Err(err) => {
                error!("{}", err);
                return Err(err.into());
            }
        };
        let key = match bound.canonicalize() {
            Ok(key) => key,
            Err(err) => {
                error!("{}", err);
                return Err(err.into());
            }
        };

        let (instance, created) = descriptor
            .registry
            .get_or_try_create(key, || descriptor.bind.factory.clone().call(arguments))
            .map_err(|err| {
                error!("{}", err);
                ConstructErrorKind::Factory(err)
            })?;

        if created {
            debug!("Instantiated and cached");
        } else {
            debug!("Found in registry");
        }

        Ok(instance)
    }

    /// Typed variant of [`Self::construct`].
    ///
    /// # Errors
    /// Same as [`Self::construct`], plus [`ConstructErrorKind::IncorrectType`] if
    /// the class's instances aren't `T`.
    pub fn construct_as<T: SendBound + SyncBound + 'static>(
        &self,
        class: ClassId,
        arguments: CallArguments,
    ) -> Result<Shared<T>, ConstructErrorKind> {
        let instance = self.construct(class, arguments)?;
        let actual = (*instance).type_id();

        instance.downcast::<T>().map_err(|_| {
            let err = ConstructErrorKind::IncorrectType {
                expected: TypeId::of::<T>(),
                actual,
            };
            error!("{}", err);
            err
        })
    }
}

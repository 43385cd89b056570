use alloc::{collections::BTreeMap, string::String};

use crate::{
    errors::{DefinitionErrorKind, InstantiateErrorKind},
    factory::{boxed_factory, BoxedCloneFactory, Factory},
    registry::InstanceRegistry,
    signature::Signature,
    utils::sharing::{SendBound, Shared, SyncBound},
};

/// Handle to a registered class, issued by
/// [`ConstructionGate::register`](crate::ConstructionGate::register).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(pub(crate) u64);

#[derive(Clone)]
pub(crate) struct Callable {
    pub(crate) signature: Signature,
    pub(crate) factory: BoxedCloneFactory,
}

/// Class-definition surface: named callables, the declared bind target and
/// an optional parent class.
#[must_use]
pub struct ClassSpec {
    pub(crate) name: String,
    pub(crate) callables: BTreeMap<String, Callable>,
    pub(crate) bind_target: Option<String>,
    pub(crate) parent: Option<ClassId>,
}

impl ClassSpec {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            callables: BTreeMap::new(),
            bind_target: None,
            parent: None,
        }
    }

    /// Declares a named callable: a signature and the construction routine
    /// behind it.
    #[inline]
    #[allow(private_bounds)]
    pub fn callable<Fac>(mut self, name: impl Into<String>, signature: Signature, factory: Fac) -> Self
    where
        Fac: Factory<Error = InstantiateErrorKind> + SendBound + SyncBound,
        Fac::Provides: SendBound + SyncBound,
    {
        self.callables.insert(
            name.into(),
            Callable {
                signature,
                factory: boxed_factory(factory),
            },
        );
        self
    }

    /// Declares which callable's signature is authoritative for construction
    /// identity. Mandatory; parents never lend theirs implicitly.
    #[inline]
    pub fn bind_target(mut self, name: impl Into<String>) -> Self {
        self.bind_target = Some(name.into());
        self
    }

    #[inline]
    pub fn child_of(mut self, parent: ClassId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Per-class record behind a [`ClassId`]: the resolved bind target, the
/// class's own callables, the parent chain and the owned instance registry.
pub(crate) struct ClassDescriptor {
    pub(crate) name: String,
    pub(crate) bind: Callable,
    pub(crate) callables: BTreeMap<String, Callable>,
    pub(crate) parent: Option<Shared<ClassDescriptor>>,
    pub(crate) registry: InstanceRegistry,
    pub(crate) singleton: bool,
}

impl core::fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("name", &self.name)
            .field("singleton", &self.singleton)
            .finish_non_exhaustive()
    }
}

impl ClassDescriptor {
    /// Own callables shadow inherited ones.
    #[must_use]
    pub(crate) fn find_callable(&self, name: &str) -> Option<&Callable> {
        if let Some(callable) = self.callables.get(name) {
            return Some(callable);
        }
        let mut parent = self.parent.as_deref();
        while let Some(descriptor) = parent {
            if let Some(callable) = descriptor.callables.get(name) {
                return Some(callable);
            }
            parent = descriptor.parent.as_deref();
        }
        None
    }

    /// Validates a spec into a descriptor.
    ///
    /// The bind target must be declared explicitly and must resolve to a
    /// callable of the class or of an ancestor. The registry starts empty
    /// and is always the descriptor's own, so subclasses never share
    /// entries with an ancestor.
    pub(crate) fn validate(spec: ClassSpec, parent: Option<Shared<ClassDescriptor>>) -> Result<Self, DefinitionErrorKind> {
        let ClassSpec {
            name, callables, bind_target, ..
        } = spec;

        let Some(target) = bind_target else {
            return Err(DefinitionErrorKind::MissingConfiguration { class: name });
        };

        let bind = callables
            .get(&target)
            .cloned()
            .or_else(|| parent.as_deref().and_then(|descriptor| descriptor.find_callable(&target).cloned()));
        let Some(bind) = bind else {
            return Err(DefinitionErrorKind::InvalidBindTarget { class: name, target });
        };

        let singleton = bind.signature.is_nullary();
        Ok(Self {
            name,
            bind,
            callables,
            parent,
            registry: InstanceRegistry::new(),
            singleton,
        })
    }
}

use alloc::collections::BTreeMap;
use parking_lot::Mutex;

use crate::{key::ConstructionKey, utils::sharing::AnyShared};

/// Per-class store of constructed instances keyed by canonical key.
///
/// Owned exclusively by its class descriptor and never handed out; only the
/// gate drives it. Entries live for the registry's lifetime.
pub(crate) struct InstanceRegistry {
    map: Mutex<BTreeMap<ConstructionKey, AnyShared>>,
}

impl InstanceRegistry {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            map: Mutex::new(BTreeMap::new()),
        }
    }

    /// Sole entry of a degenerate (nullary-signature) registry.
    #[must_use]
    pub(crate) fn single(&self) -> Option<AnyShared> {
        self.map.lock().values().next().cloned()
    }

    /// Lookup-or-create under the registry lock.
    ///
    /// The lock is held across `create`, so for a fixed key the routine runs
    /// at most once however many callers race here. A failing `create`
    /// leaves no entry behind.
    pub(crate) fn get_or_try_create<E>(
        &self,
        key: ConstructionKey,
        create: impl FnOnce() -> Result<AnyShared, E>,
    ) -> Result<(AnyShared, bool), E> {
        let mut map = self.map.lock();
        if let Some(instance) = map.get(&key) {
            return Ok((instance.clone(), false));
        }

        let instance = create()?;
        map.insert(key, instance.clone());
        Ok((instance, true))
    }

    #[must_use]
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map.lock().len()
    }
}

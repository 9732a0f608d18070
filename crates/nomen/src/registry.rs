//! Per-ordinal-type descriptor registry.
//!
//! One append-only table per [`Ordinal`] type, created on first registration.
//! Table creation is guarded by the outer lock; appends and lookups only take
//! the lock of their own table.

use std::any::{type_name, Any, TypeId};
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{Descriptor, EnumError, Ordinal, Primitive};

/// Descriptors of one ordinal type.
struct TypeTable<T: Ordinal> {
    /// Descriptors in registration order; the index is the ordinal.
    descriptors: Vec<&'static Descriptor<T>>,
    /// Name to index of the first descriptor with that name.
    by_name: FxHashMap<&'static str, usize>,
}

impl<T: Ordinal> TypeTable<T> {
    fn new() -> Self {
        TypeTable {
            descriptors: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    fn push(&mut self, name: &str) -> Result<&'static Descriptor<T>, EnumError> {
        let index = self.descriptors.len();
        let Some(repr) = T::Repr::from_index(index) else {
            return Err(EnumError::CapacityExceeded {
                type_name: type_name::<T>(),
                capacity: T::Repr::CAPACITY,
            });
        };

        // Leaked so handles can hold a plain `&'static` and compare by address
        let descriptor: &'static Descriptor<T> =
            Box::leak(Box::new(Descriptor::new(T::from_repr(repr), name)));
        self.descriptors.push(descriptor);
        self.by_name.entry(descriptor.name()).or_insert(index);

        tracing::debug!(
            enum_type = type_name::<T>(),
            ordinal = index,
            name = descriptor.name(),
            "registered enum value"
        );
        Ok(descriptor)
    }

    fn by_ordinal(&self, ordinal: T) -> Option<&'static Descriptor<T>> {
        let index = ordinal.into_repr().to_index()?;
        self.descriptors.get(index).copied()
    }

    fn by_name(&self, name: &str) -> Option<&'static Descriptor<T>> {
        self.by_name.get(name).map(|&index| self.descriptors[index])
    }
}

type TypeSlot<T> = RwLock<TypeTable<T>>;

fn downcast<T: Ordinal>(slot: &(dyn Any + Send + Sync)) -> &TypeSlot<T> {
    match slot.downcast_ref::<TypeSlot<T>>() {
        Some(table) => table,
        None => unreachable!("table keyed by `{}` holds another type", type_name::<T>()),
    }
}

/// Registry of canonical descriptors, keyed by ordinal type.
///
/// Handles resolve through [`DescriptorRegistry::global`]. Separate instances
/// are useful for probing capacity without touching process-wide state.
///
/// # Thread Safety
/// Registration may race with other registrations and lookups; each type
/// table has its own `RwLock`, and the outer map is only write-locked to
/// create a table.
pub struct DescriptorRegistry {
    tables: RwLock<FxHashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

static GLOBAL: LazyLock<DescriptorRegistry> = LazyLock::new(DescriptorRegistry::new);

impl DescriptorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        DescriptorRegistry {
            tables: RwLock::new(FxHashMap::default()),
        }
    }

    /// The process-wide registry used by [`Enum`](crate::Enum).
    pub fn global() -> &'static DescriptorRegistry {
        &GLOBAL
    }

    /// Run `f` against the table for `T`, if one exists.
    fn read_table<T: Ordinal, R>(&self, f: impl FnOnce(&TypeTable<T>) -> R) -> Option<R> {
        let tables = self.tables.read();
        let slot = downcast::<T>(&**tables.get(&TypeId::of::<T>())?);
        let table = slot.read();
        Some(f(&table))
    }

    /// Run `f` against the table for `T`, creating it on first use.
    fn write_table<T: Ordinal, R>(&self, f: impl FnOnce(&mut TypeTable<T>) -> R) -> R {
        let key = TypeId::of::<T>();

        // Fast path: table already exists
        {
            let tables = self.tables.read();
            if let Some(slot) = tables.get(&key) {
                let mut table = downcast::<T>(&**slot).write();
                return f(&mut table);
            }
        }

        // Slow path: create the table under the outer write lock. The entry
        // API covers a racing creator that won between the two locks.
        let mut tables = self.tables.write();
        let slot = tables.entry(key).or_insert_with(|| {
            tracing::trace!(enum_type = type_name::<T>(), "created enum type table");
            Box::new(TypeSlot::<T>::new(TypeTable::new()))
        });
        let mut table = downcast::<T>(&**slot).write();
        f(&mut table)
    }

    /// Try to register `name` as the next value of `T`.
    ///
    /// This is the fallible version of [`register`](Self::register).
    pub fn try_register<T: Ordinal>(&self, name: &str) -> Result<&'static Descriptor<T>, EnumError> {
        self.write_table(|table: &mut TypeTable<T>| table.push(name))
    }

    /// Register `name` as the next value of `T`.
    ///
    /// Ordinals are assigned from zero in registration order.
    ///
    /// # Panics
    /// Panics once `T` already holds `2^(BITS - 1)` values. Running out of
    /// ordinals means the ordinal type is too narrow for its declarations.
    /// Use [`try_register`](Self::try_register) for fallible registration.
    pub fn register<T: Ordinal>(&self, name: &str) -> &'static Descriptor<T> {
        self.try_register(name).unwrap_or_else(|e| {
            tracing::error!(enum_type = type_name::<T>(), name, "{e}");
            panic!("{}", e)
        })
    }

    /// Look up the descriptor of `T` with the given ordinal.
    pub fn lookup_by_ordinal<T: Ordinal>(&self, ordinal: T) -> Option<&'static Descriptor<T>> {
        self.read_table(|table: &TypeTable<T>| table.by_ordinal(ordinal))
            .flatten()
    }

    /// Look up the canonical descriptor of `T` with the given name.
    ///
    /// With duplicate names, the earliest registration wins.
    pub fn lookup_by_name<T: Ordinal>(&self, name: &str) -> Option<&'static Descriptor<T>> {
        self.read_table(|table: &TypeTable<T>| table.by_name(name))
            .flatten()
    }

    /// Snapshot of every descriptor of `T`, in registration order.
    pub fn all<T: Ordinal>(&self) -> Vec<&'static Descriptor<T>> {
        self.read_table(|table: &TypeTable<T>| table.descriptors.clone())
            .unwrap_or_default()
    }

    /// Number of values registered for `T`.
    pub fn len<T: Ordinal>(&self) -> usize {
        self.read_table(|table: &TypeTable<T>| table.descriptors.len())
            .unwrap_or(0)
    }

    /// Check if nothing has been registered for `T`.
    pub fn is_empty<T: Ordinal>(&self) -> bool {
        self.len::<T>() == 0
    }

    /// Maximum number of values `T` can hold.
    pub fn capacity<T: Ordinal>(&self) -> u64 {
        T::Repr::CAPACITY
    }
}

impl Default for DescriptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

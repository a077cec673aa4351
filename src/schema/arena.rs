use generational_arena::Arena;
pub use generational_arena::Index as ArenaIndex;
pub type ArenaOfType = Arena<Type>;

use std::ops::{Deref, DerefMut};

use super::Type;

/// An arena of [`Type`]s where every scalar type is interned exactly once
#[derive(Debug)]
pub struct TypeArena {
    arena: ArenaOfType,
    primitive_types: [ArenaIndex; 5],
}

impl TypeArena {
    pub fn new() -> Self {
        let mut arena = ArenaOfType::new();
        let primitive_types = [
            arena.insert(Type::String),
            arena.insert(Type::Int),
            arena.insert(Type::Float),
            arena.insert(Type::Bool),
            arena.insert(Type::Any),
        ];
        TypeArena {
            arena,
            primitive_types,
        }
    }

    pub fn string(&self) -> ArenaIndex {
        self.primitive_types[0]
    }

    pub fn int(&self) -> ArenaIndex {
        self.primitive_types[1]
    }

    pub fn float(&self) -> ArenaIndex {
        self.primitive_types[2]
    }

    pub fn bool(&self) -> ArenaIndex {
        self.primitive_types[3]
    }

    pub fn any(&self) -> ArenaIndex {
        self.primitive_types[4]
    }
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TypeArena {
    type Target = ArenaOfType;

    fn deref(&self) -> &Self::Target {
        &self.arena
    }
}

impl DerefMut for TypeArena {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.arena
    }
}

pub trait ITypeArena {
    fn get(&self, i: ArenaIndex) -> Option<&Type>;
    fn insert(&mut self, value: Type) -> ArenaIndex;
    fn get_primitive_types(&self) -> &[ArenaIndex; 5];

    /// Return the interned index of a scalar type, or `None` for containers
    fn get_index_of_primitive(&self, r#type: Type) -> Option<ArenaIndex> {
        let primitive_types = self.get_primitive_types();
        match r#type {
            Type::String => Some(primitive_types[0]),
            Type::Int => Some(primitive_types[1]),
            Type::Float => Some(primitive_types[2]),
            Type::Bool => Some(primitive_types[3]),
            Type::Any => Some(primitive_types[4]),
            Type::Array(_) | Type::Record(_) => None,
        }
    }
}

impl ITypeArena for TypeArena {
    #[inline(always)]
    fn get(&self, i: ArenaIndex) -> Option<&Type> {
        Deref::deref(self).get(i)
    }

    #[inline(always)]
    fn insert(&mut self, value: Type) -> ArenaIndex {
        DerefMut::deref_mut(self).insert(value)
    }

    #[inline(always)]
    fn get_primitive_types(&self) -> &[ArenaIndex; 5] {
        &self.primitive_types
    }
}

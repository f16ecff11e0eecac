use std::fmt;

/// Record types of the entity store, used to pick response messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Person,
    Planet,
    Vehicle,
}

impl Resource {
    pub fn not_found_msg(&self) -> &'static str {
        match self {
            Self::User => "Usuario no existe",
            Self::Person => "Personaje no existe",
            Self::Planet => "Planeta no existe",
            Self::Vehicle => "Vehiculo no existe",
        }
    }

    pub fn conflict_msg(&self) -> &'static str {
        match self {
            Self::User => "User exist in the system",
            Self::Person => "El personaje ya existe en el sistema",
            Self::Planet => "El planeta ya existe en el sistema",
            Self::Vehicle => "El vehiculo ya existe en el sistema",
        }
    }

    pub fn created_msg(&self) -> &'static str {
        match self {
            Self::User => "El usuario fue creado con exito",
            Self::Person => "El personaje fue creado con exito",
            Self::Planet => "El planeta fue creado con exito",
            Self::Vehicle => "El vehiculo fue creado con exito",
        }
    }

    pub fn updated_msg(&self) -> &'static str {
        match self {
            Self::User => "El usuario fue modificado con exito",
            Self::Person => "El personaje fue modificado con exito",
            Self::Planet => "El planeta fue modificado con exito",
            Self::Vehicle => "El vehiculo fue modificado con exito",
        }
    }

    pub fn deleted_msg(&self) -> &'static str {
        match self {
            Self::User => "Eliminación correcta de Usuario",
            Self::Person => "Eliminación correcta de Personaje",
            Self::Planet => "Eliminación correcta de Planeta",
            Self::Vehicle => "Eliminación correcta de Vehiculo",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "User",
            Self::Person => "Person",
            Self::Planet => "Planet",
            Self::Vehicle => "Vehicle",
        };

        f.write_str(name)
    }
}

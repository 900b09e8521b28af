//! Built-in materials shown when the API is unreachable and offline
//! fallback is enabled. Read-only: writes are never simulated.

use crate::model::Material;

const PLACEHOLDERS: [(i32, &str, &str); 5] = [
    (1, "Parafuso M6x30", "Parafuso sextavado métrico 6mm x 30mm"),
    (2, "Porca M6", "Porca sextavada métrica 6mm"),
    (3, "Arruela Lisa M6", "Arruela lisa para parafuso M6"),
    (4, "Cabo Flexível 2,5mm", "Cabo flexível para instalações elétricas"),
    (5, "Disjuntor 20A", "Disjuntor monopolar 20 amperes"),
];

pub fn placeholder_materials() -> Vec<Material> {
    PLACEHOLDERS
        .iter()
        .map(|(id, name, description)| Material {
            id: *id,
            name: name.to_string(),
            description: description.to_string(),
            created_at: None,
            updated_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_ordered() {
        let materials = placeholder_materials();
        assert_eq!(materials.len(), 5);
        assert!(materials.windows(2).all(|w| w[0].id < w[1].id));
    }
}

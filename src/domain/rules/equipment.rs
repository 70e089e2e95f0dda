//! Starting equipment and gold granted per class at final assembly

pub fn starting_equipment(class: &str) -> &'static [&'static str] {
    match class {
        "Guerreiro" => &[
            "Espada longa",
            "Escudo",
            "Cota de malha",
            "Pacote do explorador",
        ],
        "Mago" => &[
            "Cajado",
            "Livro de magias",
            "Bolsa de componentes",
            "Pacote do estudioso",
        ],
        "Ladino" => &[
            "Rapiera",
            "Arco curto",
            "Ferramentas de ladrão",
            "Pacote do ladrão",
        ],
        "Clérigo" => &["Maça", "Escudo", "Símbolo sagrado", "Pacote do acólito"],
        "Paladino" => &[
            "Espada marcial",
            "Escudo",
            "Cota de malha",
            "Símbolo sagrado",
        ],
        "Bárbaro" => &["Machado grande", "Duas machadinhas", "Pacote do explorador"],
        "Bardo" => &[
            "Rapiera",
            "Instrumento musical",
            "Armadura leve",
            "Pacote do artista",
        ],
        "Ranger" => &["Espadas curtas", "Arco longo", "Pacote do explorador"],
        "Druida" => &[
            "Cajado",
            "Escudo de madeira",
            "Símbolo druídico",
            "Pacote do explorador",
        ],
        "Monge" => &["Bastão", "10 dardos", "Pacote do explorador"],
        "Feiticeiro" => &["Adagas", "Bolsa de componentes", "Pacote do explorador"],
        "Bruxo" => &["Adaga", "Foco arcano", "Pacote do estudioso"],
        _ => &[],
    }
}

pub fn starting_gold(class: &str) -> u32 {
    match class {
        "Bardo" | "Clérigo" | "Paladino" | "Ladino" => 15,
        "Bárbaro" | "Druida" | "Guerreiro" | "Ranger" | "Mago" | "Feiticeiro" | "Bruxo" => 10,
        "Monge" => 5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_equipment_and_gold() {
        for class in crate::domain::rules::CLASSES {
            assert!(!starting_equipment(class.name).is_empty(), "{}", class.name);
            assert!(starting_gold(class.name) > 0, "{}", class.name);
        }
    }

    #[test]
    fn test_unknown_class_gets_nothing() {
        assert!(starting_equipment("Samurai").is_empty());
        assert_eq!(starting_gold("Samurai"), 0);
    }
}

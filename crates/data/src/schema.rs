use serde::{Deserialize, Serialize};
use smallworld_core::{Card, CardId, CardKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardImage {
    pub id: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_url_small: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPrice {
    #[serde(default)]
    pub cardmarket_price: String,
    #[serde(default)]
    pub tcgplayer_price: String,
    #[serde(default)]
    pub ebay_price: String,
    #[serde(default)]
    pub amazon_price: String,
    #[serde(default)]
    pub coolstuffinc_price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSet {
    pub set_name: String,
    pub set_code: String,
    #[serde(default)]
    pub set_rarity: String,
    #[serde(default)]
    pub set_rarity_code: String,
    #[serde(default)]
    pub set_price: String,
}

/// One record of the `cardinfo.php` dump. Only the Small World properties reach the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDef {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub type_line: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub atk: Option<i32>,
    #[serde(default)]
    pub def: Option<i32>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub scale: Option<i32>,
    #[serde(default)]
    pub linkval: Option<i32>,
    #[serde(default)]
    pub linkmarkers: Vec<String>,
    #[serde(default)]
    pub card_sets: Vec<CardSet>,
    #[serde(default)]
    pub card_images: Vec<CardImage>,
    #[serde(default)]
    pub card_prices: Vec<CardPrice>,
}

impl CardDef {
    pub fn kind(&self) -> CardKind {
        CardKind::from_type_line(&self.type_line)
    }

    /// Link monsters carry no level or DEF; both compare as 0.
    pub fn to_card(&self) -> Card {
        Card {
            id: CardId(self.id),
            name: self.name.clone(),
            kind: self.kind(),
            race: self.race.clone(),
            attribute: self.attribute.clone().unwrap_or_default(),
            level: self.level.unwrap_or(0),
            atk: self.atk.unwrap_or(0),
            def: self.def.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub data: Vec<CardDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_record_parses_without_monster_fields() {
        let raw = r#"{
            "id": 89558743,
            "name": "Small World",
            "type": "Spell Card",
            "race": "Normal",
            "card_prices": [{"cardmarket_price": "2.10"}]
        }"#;
        let def: CardDef = serde_json::from_str(raw).expect("parse");
        assert_eq!(def.kind(), CardKind::Spell);
        let card = def.to_card();
        assert_eq!(card.attribute, "");
        assert_eq!(card.level, 0);
    }

    #[test]
    fn link_monster_defaults_missing_level_and_def() {
        let raw = r#"{
            "id": 1861629,
            "name": "Decode Talker",
            "type": "Link Monster",
            "atk": 2300,
            "race": "Cyberse",
            "attribute": "DARK",
            "linkval": 3,
            "linkmarkers": ["Top", "Bottom-Left", "Bottom-Right"]
        }"#;
        let def: CardDef = serde_json::from_str(raw).expect("parse");
        let card = def.to_card();
        assert!(card.is_monster());
        assert_eq!((card.level, card.atk, card.def), (0, 2300, 0));
    }
}

//! Blocking line protocol: the referee's side of the pipe
//!
//! One value per line, one record per line, fixed field positions. A
//! malformed or missing field is fatal; the engine cannot decide a
//! turn from a partial snapshot. A clean end of input at a turn
//! boundary means the match is over.

use std::io::BufRead;
use std::str::SplitWhitespace;

use tracing::trace;

use crate::arena::entity::Entity;
use crate::arena::item::{Item, ItemCatalog};
use crate::arena::snapshot::Snapshot;
use crate::core::types::{HeroClass, Point, Team, UnitId, UnitKind};
use crate::core::{BotError, Result};

/// Static setup read once before the first turn
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub my_team: i32,
    pub features: Vec<MapFeature>,
    pub catalog: ItemCatalog,
}

/// Bush or spawn-point marker. Parsed for protocol completeness; the
/// tactics ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapFeature {
    pub is_bush: bool,
    pub pos: Point,
    pub radius: i32,
}

pub struct ProtocolReader<R> {
    reader: R,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Setup block: team id, map features, item catalog.
    pub fn read_setup(&mut self) -> Result<GameSetup> {
        let my_team = self.read_int("team id")?;

        let feature_count = self.read_int("feature count")?;
        let mut features = Vec::with_capacity(feature_count.max(0) as usize);
        for _ in 0..feature_count {
            let line = self.read_line("map feature")?;
            features.push(parse_feature(&line)?);
        }

        let item_count = self.read_int("item count")?;
        let mut catalog = ItemCatalog::new();
        for _ in 0..item_count {
            let line = self.read_line("item record")?;
            catalog.push(parse_item(&line)?);
        }

        trace!(
            my_team,
            features = features.len(),
            items = catalog.len(),
            "setup read"
        );
        Ok(GameSetup {
            my_team,
            features,
            catalog,
        })
    }

    /// One turn block, or `None` when the referee has closed the pipe.
    pub fn read_turn(&mut self, my_team: i32) -> Result<Option<Snapshot>> {
        let Some(gold_line) = self.try_read_line()? else {
            return Ok(None);
        };
        let gold = parse_int(&gold_line, "gold")?;
        let enemy_gold = self.read_int("enemy gold")?;
        let round_type = self.read_int("round type")?;

        let entity_count = self.read_int("entity count")?;
        let mut entities = Vec::with_capacity(entity_count.max(0) as usize);
        for _ in 0..entity_count {
            let line = self.read_line("entity record")?;
            entities.push(parse_entity(&line, my_team)?);
        }

        Ok(Some(Snapshot::new(gold, enemy_gold, round_type, entities)))
    }

    /// Next line with the trailing newline stripped, or `None` at end
    /// of input.
    fn try_read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn read_line(&mut self, context: &str) -> Result<String> {
        self.try_read_line()?
            .ok_or_else(|| BotError::UnexpectedEof(context.to_string()))
    }

    fn read_int(&mut self, context: &str) -> Result<i32> {
        let line = self.read_line(context)?;
        parse_int(&line, context)
    }
}

/// Whitespace-separated fields of one record line. Keeps the whole
/// line around so errors can quote it.
struct Fields<'a> {
    parts: SplitWhitespace<'a>,
    line: &'a str,
    context: &'a str,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str, context: &'a str) -> Self {
        Self {
            parts: line.split_whitespace(),
            line,
            context,
        }
    }

    fn next_str(&mut self) -> Result<&'a str> {
        self.parts.next().ok_or_else(|| self.malformed())
    }

    fn next_int(&mut self) -> Result<i32> {
        let token = self.next_str()?;
        token.parse().map_err(|_| self.malformed())
    }

    fn malformed(&self) -> BotError {
        BotError::MalformedLine {
            context: self.context.to_string(),
            line: self.line.to_string(),
        }
    }
}

fn parse_int(line: &str, context: &str) -> Result<i32> {
    line.trim().parse().map_err(|_| BotError::MalformedLine {
        context: context.to_string(),
        line: line.to_string(),
    })
}

fn parse_feature(line: &str) -> Result<MapFeature> {
    let mut fields = Fields::new(line, "map feature");
    let is_bush = match fields.next_str()? {
        "BUSH" => true,
        "SPAWN" => false,
        _ => return Err(fields.malformed()),
    };
    let x = fields.next_int()?;
    let y = fields.next_int()?;
    let radius = fields.next_int()?;
    Ok(MapFeature {
        is_bush,
        pos: Point::new(x, y),
        radius,
    })
}

fn parse_item(line: &str) -> Result<Item> {
    let mut fields = Fields::new(line, "item record");
    Ok(Item {
        name: fields.next_str()?.to_string(),
        cost: fields.next_int()?,
        damage: fields.next_int()?,
        health: fields.next_int()?,
        max_health: fields.next_int()?,
        mana: fields.next_int()?,
        max_mana: fields.next_int()?,
        speed: fields.next_int()?,
        mana_regen: fields.next_int()?,
        is_potion: fields.next_int()? != 0,
    })
}

/// One entity record. The hero-class token occupies its field for
/// every kind; it only has to name a real class when the entity is a
/// hero.
fn parse_entity(line: &str, my_team: i32) -> Result<Entity> {
    let mut fields = Fields::new(line, "entity record");
    let id = fields.next_int()?;
    let team_raw = fields.next_int()?;
    let kind_token = fields.next_str()?;
    let kind = UnitKind::from_token(kind_token)
        .ok_or_else(|| BotError::UnknownUnitKind(kind_token.to_string()))?;
    let x = fields.next_int()?;
    let y = fields.next_int()?;
    let attack_range = fields.next_int()?;
    let health = fields.next_int()?;
    let max_health = fields.next_int()?;
    let shield = fields.next_int()?;
    let attack_damage = fields.next_int()?;
    let speed = fields.next_int()?;
    let stun_duration = fields.next_int()?;
    let gold_value = fields.next_int()?;
    let cooldowns = [
        fields.next_int()?,
        fields.next_int()?,
        fields.next_int()?,
    ];
    let mana = fields.next_int()?;
    let max_mana = fields.next_int()?;
    let mana_regen = fields.next_int()?;
    let class_token = fields.next_str()?;
    let hero_class = if kind == UnitKind::Hero {
        Some(
            HeroClass::from_token(class_token)
                .ok_or_else(|| BotError::UnknownHeroClass(class_token.to_string()))?,
        )
    } else {
        None
    };
    let visible = fields.next_int()? != 0;
    let items_owned = fields.next_int()?;

    Ok(Entity {
        id: UnitId(id),
        team: if team_raw == my_team {
            Team::Mine
        } else {
            Team::Theirs
        },
        kind,
        pos: Point::new(x, y),
        attack_range,
        health,
        max_health,
        shield,
        attack_damage,
        speed,
        stun_duration,
        gold_value,
        cooldowns,
        mana,
        max_mana,
        mana_regen,
        hero_class,
        visible,
        items_owned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO_LINE: &str = "1 0 HERO 500 300 150 1000 1000 0 60 400 0 300 0 2 0 100 200 2 IRONMAN 1 1";
    const UNIT_LINE: &str = "7 1 UNIT 620 310 90 400 400 0 40 150 0 30 0 0 0 0 0 0 - 1 0";

    #[test]
    fn test_read_setup() {
        let input = "0\n2\nBUSH 100 120 50\nSPAWN 1800 600 40\n1\nRED_POTION 50 0 60 0 0 0 0 0 1\n";
        let mut reader = ProtocolReader::new(input.as_bytes());
        let setup = reader.read_setup().expect("setup should parse");

        assert_eq!(setup.my_team, 0);
        assert_eq!(setup.features.len(), 2);
        assert!(setup.features[0].is_bush);
        assert_eq!(setup.features[0].pos, Point::new(100, 120));
        assert!(!setup.features[1].is_bush);
        assert_eq!(setup.catalog.len(), 1);
        let potion = setup.catalog.get("RED_POTION").expect("catalog entry");
        assert!(potion.is_potion);
        assert_eq!(potion.health, 60);
    }

    #[test]
    fn test_read_turn_splits_teams_and_parses_classes() {
        let input = format!("120\n90\n0\n2\n{}\n{}\n", HERO_LINE, UNIT_LINE);
        let mut reader = ProtocolReader::new(input.as_bytes());
        let snapshot = reader
            .read_turn(0)
            .expect("turn should parse")
            .expect("turn should be present");

        assert_eq!(snapshot.gold, 120);
        assert_eq!(snapshot.enemy_gold, 90);
        assert_eq!(snapshot.round_type, 0);

        let hero = snapshot.get(UnitId(1)).expect("hero present");
        assert_eq!(hero.team, Team::Mine);
        assert_eq!(hero.hero_class, Some(HeroClass::Ironman));
        assert_eq!(hero.cooldowns, [0, 2, 0]);
        assert_eq!(hero.items_owned, 1);

        let unit = snapshot.get(UnitId(7)).expect("unit present");
        assert_eq!(unit.team, Team::Theirs);
        assert_eq!(unit.hero_class, None);
        assert!(unit.visible);
    }

    #[test]
    fn test_team_resolution_follows_setup_id() {
        let input = format!("120\n90\n0\n1\n{}\n", UNIT_LINE);
        let mut reader = ProtocolReader::new(input.as_bytes());
        let snapshot = reader.read_turn(1).expect("parse").expect("present");
        // team 1 in the record, reading as team 1: that unit is mine
        assert_eq!(snapshot.get(UnitId(7)).expect("unit").team, Team::Mine);
    }

    #[test]
    fn test_end_of_input_at_turn_boundary_is_clean() {
        let mut reader = ProtocolReader::new("".as_bytes());
        assert!(reader.read_turn(0).expect("clean end").is_none());
    }

    #[test]
    fn test_end_of_input_mid_turn_is_fatal() {
        let mut reader = ProtocolReader::new("120\n".as_bytes());
        match reader.read_turn(0) {
            Err(BotError::UnexpectedEof(context)) => assert_eq!(context, "enemy gold"),
            other => panic!("expected unexpected-eof, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_count_is_fatal() {
        let mut reader = ProtocolReader::new("abc\n".as_bytes());
        assert!(matches!(
            reader.read_turn(0),
            Err(BotError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_short_entity_record_is_fatal() {
        let input = "120\n90\n0\n1\n1 0 HERO 500 300\n";
        let mut reader = ProtocolReader::new(input.as_bytes());
        assert!(matches!(
            reader.read_turn(0),
            Err(BotError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_unknown_hero_class_is_fatal() {
        let line = HERO_LINE.replace("IRONMAN", "BATMAN");
        let input = format!("120\n90\n0\n1\n{}\n", line);
        let mut reader = ProtocolReader::new(input.as_bytes());
        assert!(matches!(
            reader.read_turn(0),
            Err(BotError::UnknownHeroClass(_))
        ));
    }

    #[test]
    fn test_unknown_unit_kind_is_fatal() {
        let line = UNIT_LINE.replace("UNIT", "MINION");
        let input = format!("120\n90\n0\n1\n{}\n", line);
        let mut reader = ProtocolReader::new(input.as_bytes());
        assert!(matches!(
            reader.read_turn(0),
            Err(BotError::UnknownUnitKind(_))
        ));
    }

    #[test]
    fn test_crlf_lines_parse() {
        let input = "7\r\n";
        let mut reader = ProtocolReader::new(input.as_bytes());
        let setup_gold = reader.read_int("gold").expect("int with crlf");
        assert_eq!(setup_gold, 7);
    }
}

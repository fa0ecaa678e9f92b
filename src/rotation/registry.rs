// ============================================
// Rotation Registry - Загрузка/сохранение маппингов
// ============================================
// Один JSON-документ на семейство в <working_dir>/mappings/.
// Первая строка документа - комментарий "//", тело - объект
// {"mod:block": <правило>}. Парсинг лояльный: битая запись
// пропускается, битый документ пропускается целиком

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::blocks::BlockIndex;
use crate::rotation::defaults::generate_defaults;
use crate::rotation::mapping::{RotationFamily, RotationMapping, RotationRule};
use crate::rotation::rules::{DoorRule, FourRule, PillarRule, StairsRule, TrapdoorRule};

const MAPPINGS_SUBDIR: &str = "mappings";

/// Ошибка декодирования одной записи документа
#[derive(Debug)]
pub enum DecodeError {
    NotAnObject,
    /// В catch-all документе нет ключа "type"
    MissingType,
    UnknownType(String),
    BadShape(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotAnObject => write!(f, "entry is not a JSON object"),
            DecodeError::MissingType => write!(f, "entry in catch-all document has no \"type\""),
            DecodeError::UnknownType(t) => write!(f, "unknown rule type \"{}\"", t),
            DecodeError::BadShape(e) => write!(f, "bad rule shape: {}", e),
        }
    }
}

/// Реестр правил вращения с кэшем по runtime ID
pub struct RotationMappings {
    dir: PathBuf,
    mappings: HashMap<String, RotationMapping>,
    /// Кэш runtime ID -> имя; None запоминает неудачное разрешение
    by_id: HashMap<u16, Option<String>>,
}

impl RotationMappings {
    /// Загрузить реестр из <working_dir>/mappings/; при пустом результате
    /// сгенерировать дефолты по внешнему реестру и сразу сохранить.
    /// Ошибки IO не выходят наружу - логируются и деградируют к дефолтам.
    pub fn init(working_dir: &Path, index: &dyn BlockIndex) -> Self {
        let dir = working_dir.join(MAPPINGS_SUBDIR);
        if let Err(e) = fs::create_dir_all(&dir) {
            log::warn!("Failed to create mappings dir {:?}: {}", dir, e);
        }
        let mut registry = Self {
            dir,
            mappings: HashMap::new(),
            by_id: HashMap::new(),
        };
        registry.load_all();
        if registry.mappings.is_empty() {
            registry.mappings = generate_defaults(index);
            log::info!(
                "No rotation mappings on disk, generated {} defaults",
                registry.mappings.len()
            );
            registry.save();
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&RotationMapping> {
        self.mappings.get(name)
    }

    /// Административная вставка/замена; на диск не пишет
    pub fn put(&mut self, name: impl Into<String>, mapping: RotationMapping) {
        self.mappings.insert(name.into(), mapping);
        self.by_id.clear();
    }

    /// Поиск по runtime ID с мемоизацией (включая отрицательный результат)
    pub fn lookup_by_id(&mut self, id: u16, index: &dyn BlockIndex) -> Option<&RotationMapping> {
        if !self.by_id.contains_key(&id) {
            let resolved = index
                .name_of(id)
                .filter(|name| self.mappings.contains_key(name));
            log::debug!("Rotation cache fill: id {} -> {:?}", id, resolved);
            self.by_id.insert(id, resolved);
        }
        match self.by_id.get(&id) {
            Some(Some(name)) => self.mappings.get(name),
            _ => None,
        }
    }

    pub fn all(&self) -> &HashMap<String, RotationMapping> {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    fn document_path(&self, family: RotationFamily) -> PathBuf {
        self.dir.join(format!("{}.json", family.tag()))
    }

    fn load_all(&mut self) {
        for family in RotationFamily::ALL {
            let path = self.document_path(family);
            if path.exists() {
                self.load_document(&path, family);
            }
        }
    }

    fn load_document(&mut self, path: &Path, family: RotationFamily) {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to read {:?}: {}", path, e);
                return;
            }
        };
        let root: Value = match serde_json::from_str(&strip_comments(&text)) {
            Ok(root) => root,
            Err(e) => {
                log::warn!("Skipping malformed document {:?}: {}", path, e);
                return;
            }
        };
        let Some(entries) = root.as_object() else {
            log::warn!("Skipping document {:?}: root is not an object", path);
            return;
        };
        for (name, result) in decode_document(family, entries) {
            match result {
                Ok(mapping) => {
                    self.mappings.insert(name, mapping);
                }
                Err(e) => {
                    log::warn!("Skipping entry \"{}\" in {:?}: {}", name, path, e);
                }
            }
        }
    }

    /// Записать по документу на семейство (включая пустые)
    pub fn save(&self) {
        let mut docs: HashMap<RotationFamily, Map<String, Value>> = RotationFamily::ALL
            .iter()
            .map(|&family| (family, Map::new()))
            .collect();
        for (name, mapping) in &self.mappings {
            match encode_entry(mapping) {
                Some(value) => {
                    if let Some(doc) = docs.get_mut(&mapping.family()) {
                        doc.insert(name.clone(), value);
                    }
                }
                None => {
                    log::warn!("Cannot encode mapping \"{}\" for its document, skipped", name);
                }
            }
        }
        for family in RotationFamily::ALL {
            let doc = docs.remove(&family).unwrap_or_default();
            let body = match serde_json::to_string_pretty(&Value::Object(doc)) {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("Failed to serialize {} document: {}", family.tag(), e);
                    continue;
                }
            };
            let text = format!("{}\n{}", document_header(family), body);
            let path = self.document_path(family);
            if let Err(e) = fs::write(&path, text) {
                log::warn!("Failed to write {:?}: {}", path, e);
            }
        }
    }
}

fn document_header(family: RotationFamily) -> String {
    let mut header = format!("// Rotation mappings for {}", family.tag());
    if family == RotationFamily::Other {
        header.push_str(
            "\n// type values: STAIR (top/bottom arrays), PILLAR (groups), \
             FOUR (metas array), TRAP_DOOR\n\
             // Example: \"mod:block\": { \"type\": \"FOUR\", \"metas\": [0,1,2,3] }",
        );
    }
    header
}

/// JSON с комментариями: строки "//" выбрасываются перед парсингом
fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Декодировать все записи документа; ошибки по-записно
fn decode_document(
    family: RotationFamily,
    entries: &Map<String, Value>,
) -> Vec<(String, Result<RotationMapping, DecodeError>)> {
    entries
        .iter()
        .map(|(name, value)| (name.clone(), decode_entry(family, value)))
        .collect()
}

fn decode_entry(family: RotationFamily, value: &Value) -> Result<RotationMapping, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::NotAnObject)?;
    let shape = match family {
        RotationFamily::Other => obj
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_uppercase)
            .ok_or(DecodeError::MissingType)?,
        RotationFamily::Stairs => "STAIRS".to_string(),
        RotationFamily::Pillar => "PILLAR".to_string(),
        RotationFamily::Door => "DOOR".to_string(),
        RotationFamily::TrapDoor => "TRAP_DOOR".to_string(),
        RotationFamily::FourDirection => "FOUR".to_string(),
    };
    let rule = match shape.as_str() {
        "STAIR" | "STAIRS" => RotationRule::Stairs(decode_shape::<StairsRule>(value)?),
        "PILLAR" => RotationRule::Pillar(decode_pillar(value)?),
        "DOOR" => RotationRule::Door(DoorRule::new()),
        "FOUR" | "FENCE_GATE" => RotationRule::Four(decode_shape::<FourRule>(value)?),
        "TRAP_DOOR" => RotationRule::TrapDoor(decode_trapdoor(value)?),
        other => return Err(DecodeError::UnknownType(other.to_string())),
    };
    Ok(RotationMapping::from_parts(family, rule))
}

fn decode_shape<T: for<'de> Deserialize<'de>>(value: &Value) -> Result<T, DecodeError> {
    serde_json::from_value(value.clone()).map_err(|e| DecodeError::BadShape(e.to_string()))
}

/// Либо {"groups": {"0": [y,x,z], ...}}, либо legacy {"x","y","z"}
#[derive(Deserialize)]
#[serde(untagged)]
enum PillarDoc {
    Groups { groups: BTreeMap<String, [u16; 3]> },
    Legacy { x: u16, y: u16, z: u16 },
}

fn decode_pillar(value: &Value) -> Result<PillarRule, DecodeError> {
    match decode_shape::<PillarDoc>(value)? {
        PillarDoc::Groups { groups } => {
            let mut keyed: Vec<(usize, [u16; 3])> = groups
                .into_iter()
                .map(|(key, g)| (key.parse::<usize>().unwrap_or(usize::MAX), g))
                .collect();
            keyed.sort_by_key(|&(idx, _)| idx);
            Ok(PillarRule::new(keyed.into_iter().map(|(_, g)| g).collect()))
        }
        PillarDoc::Legacy { x, y, z } => Ok(PillarRule::single(y, x, z)),
    }
}

#[derive(Deserialize, Default)]
struct TrapdoorHalfDoc {
    #[serde(default)]
    closed: Option<[u16; 4]>,
    #[serde(default)]
    open: Option<[u16; 4]>,
}

#[derive(Deserialize)]
struct TrapdoorDoc {
    #[serde(default)]
    bottom: Option<TrapdoorHalfDoc>,
    #[serde(default)]
    top: Option<TrapdoorHalfDoc>,
}

fn decode_trapdoor(value: &Value) -> Result<TrapdoorRule, DecodeError> {
    let doc = decode_shape::<TrapdoorDoc>(value)?;
    let fallback = TrapdoorRule::default();
    let bottom = doc.bottom.unwrap_or_default();
    let top = doc.top.unwrap_or_default();
    Ok(TrapdoorRule::new(
        bottom.closed.unwrap_or(*fallback.bottom_closed()),
        bottom.open.unwrap_or(*fallback.bottom_open()),
        top.closed.unwrap_or(*fallback.top_closed()),
        top.open.unwrap_or(*fallback.top_open()),
    ))
}

/// None для форм, не представимых в своём документе (Door в catch-all)
fn encode_entry(mapping: &RotationMapping) -> Option<Value> {
    let in_other = mapping.family() == RotationFamily::Other;
    let (mut obj, type_tag) = match mapping.rule() {
        RotationRule::Stairs(rule) => (
            json!({ "top": rule.top(), "bottom": rule.bottom() }),
            "STAIR",
        ),
        RotationRule::Pillar(rule) => {
            let mut groups = Map::new();
            for (idx, g) in rule.groups().iter().enumerate() {
                groups.insert(idx.to_string(), json!(g));
            }
            (json!({ "groups": groups }), "PILLAR")
        }
        RotationRule::Door(_) => {
            if in_other {
                return None;
            }
            (json!({}), "")
        }
        RotationRule::Four(rule) => (json!({ "metas": rule.metas() }), "FOUR"),
        RotationRule::TrapDoor(rule) => (
            json!({
                "bottom": { "closed": rule.bottom_closed(), "open": rule.bottom_open() },
                "top": { "closed": rule.top_closed(), "open": rule.top_open() },
            }),
            "TRAP_DOOR",
        ),
    };
    if in_other {
        if let Some(entry) = obj.as_object_mut() {
            entry.insert("type".to_string(), Value::String(type_tag.to_string()));
        }
    }
    Some(obj)
}

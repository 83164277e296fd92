use super::types::*;
use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default)]
pub struct ParsedInputConfig {
    pub input_map: InputMap,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ActionDecl {
    description: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct DebugSection {
    bindings: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    actions: Option<BTreeMap<String, ActionDecl>>,
    bindings: Option<BTreeMap<String, Vec<String>>>,
    debug: Option<DebugSection>,
}

/// Parses an input TOML document. Problems are collected per entry so one bad binding
/// does not discard the rest of the map.
pub fn parse_input_toml(raw: &str, debug_layer: bool) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("Top-level parse: {e}"));
            return result;
        }
    };

    let mut input_map = InputMap::default();
    for (name, decl) in root.actions.unwrap_or_default() {
        if !validate_action_name(&name) {
            result
                .errors
                .push(format!("Invalid action name '{}': must be PascalCase", name));
            continue;
        }
        let id = ActionId(input_map.actions.len() as u16);
        input_map.actions.push(ActionMeta {
            id,
            name: name.clone(),
            description: decl.description.unwrap_or_default(),
        });
        input_map.name_to_id.insert(name, id);
    }
    input_map.states = vec![ActionStateBinary::default(); input_map.actions.len()];

    // Merge bindings (normal + debug overlay if allowed)
    let mut all_bindings: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (k, v) in root.bindings.unwrap_or_default() {
        all_bindings.entry(k).or_default().extend(v);
    }
    if debug_layer {
        if let Some(db) = root.debug.and_then(|d| d.bindings) {
            for (k, v) in db {
                all_bindings.entry(k).or_default().extend(v);
            }
        }
    }

    let mut binding_id: u32 = 0;
    for (action_name, list) in all_bindings {
        let Some(aid) = input_map.name_to_id.get(&action_name).copied() else {
            result
                .errors
                .push(format!("Binding references unknown action '{}'", action_name));
            continue;
        };
        for spec in &list {
            match parse_binding(spec) {
                Ok((tokens, hold)) => {
                    input_map.bindings_index.entry(aid).or_default().push(binding_id);
                    input_map.bindings.push(Binding {
                        id: binding_id,
                        tokens,
                        hold_secs: hold,
                    });
                    binding_id += 1;
                }
                Err(err) => {
                    result
                        .errors
                        .push(format!("[binding {} '{}'] {err}", action_name, spec));
                }
            }
        }
    }
    input_map.bindings_runtime = vec![BindingRuntime::default(); input_map.bindings.len()];
    result.input_map = input_map;
    result
}

fn validate_action_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_uppercase() {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn parse_binding(spec: &str) -> Result<(SmallVec<[RawBindingToken; 2]>, f32), String> {
    let mut tokens: SmallVec<[RawBindingToken; 2]> = SmallVec::new();
    let mut hold: f32 = 0.0;
    let mut seen: HashSet<RawBindingToken> = HashSet::new();
    for part in spec.split('+') {
        let mut p = part.trim();
        if p.is_empty() {
            continue;
        }
        if let Some(rest) = p.strip_prefix("hold>") {
            let (secs_str, after) = rest
                .split_once(':')
                .ok_or_else(|| format!("Malformed hold qualifier '{}': missing ':'", p))?;
            hold = secs_str
                .parse::<f32>()
                .map_err(|_| format!("Invalid hold seconds '{}'", secs_str))?;
            p = after;
        }
        let token = parse_token(p)?;
        if !seen.insert(token) {
            return Err(format!("Duplicate token in chord: {:?}", token));
        }
        tokens.push(token);
    }
    if tokens.is_empty() {
        return Err("Empty binding".into());
    }
    Ok((tokens, hold))
}

fn parse_token(s: &str) -> Result<RawBindingToken, String> {
    if let Some(rest) = s.strip_prefix("Key:") {
        return parse_keycode(rest);
    }
    if let Some(rest) = s.strip_prefix("Mouse:") {
        return match rest {
            "Left" => Ok(RawBindingToken::MouseBtn(MouseButton::Left)),
            "Right" => Ok(RawBindingToken::MouseBtn(MouseButton::Right)),
            "Middle" => Ok(RawBindingToken::MouseBtn(MouseButton::Middle)),
            other => Err(format!("Unknown mouse button '{}'", other)),
        };
    }
    Err(format!("Unrecognized token '{}'", s))
}

fn parse_keycode(name: &str) -> Result<RawBindingToken, String> {
    let kc = match name {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "A" | "KeyA" => KeyCode::KeyA,
        "D" | "KeyD" => KeyCode::KeyD,
        "S" | "KeyS" => KeyCode::KeyS,
        "R" | "KeyR" => KeyCode::KeyR,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "ArrowDown" => KeyCode::ArrowDown,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ControlLeft" => KeyCode::ControlLeft,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        other => return Err(format!("Unsupported KeyCode '{}' (extend parser)", other)),
    };
    Ok(RawBindingToken::Key(kc))
}

//! Puzzle definition parsing and graph construction
//!
//! Definitions arrive as JSON: per-face joins and tile position specs, plus
//! the tile list with its declared total. Construction is two-pass: every
//! face and tile position is created first, then joins are resolved through
//! the position id index, so cross-references never require ownership cycles.

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::face::Face;
use crate::puzzle::pool::TilePool;
use crate::puzzle::position::TilePosition;
use crate::puzzle::side::Side;
use crate::puzzle::tetrahedron::Tetrahedron;
use crate::puzzle::tile::Tile;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Top-level JSON structure describing a puzzle
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDefinition {
    /// Display name of the puzzle
    pub puzzle: String,
    /// The four face descriptions
    pub faces: Vec<FaceDefinition>,
    /// The tile set
    pub tile_data: TileData,
}

/// One face: its name, face-level joins and tile position specs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDefinition {
    /// Face name, one of 1-4
    pub name: String,
    /// Joins to the three neighboring faces
    pub joins: Vec<FaceJoinDefinition>,
    /// Tile positions on this face, in listing order
    pub tile_positions: Vec<PositionDefinition>,
}

/// A face-level join
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceJoinDefinition {
    /// Side of this face the join leaves from
    pub from_side: Side,
    /// Side of the target face the join arrives at
    pub to_side: Side,
    /// Name of the target face
    pub of_face: String,
}

/// One tile position and its joins to neighboring positions
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDefinition {
    /// Position name within its face
    pub name: String,
    /// Joins to the three neighboring positions
    pub joins: Vec<PositionJoinDefinition>,
}

/// A position-level join
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionJoinDefinition {
    /// Side of this position the join leaves from
    pub from_side: Side,
    /// Side of the target position the join arrives at
    pub to_side: Side,
    /// Face owning the target position
    pub of_face: String,
    /// Name of the target position within its face
    pub of_position: String,
}

/// The tile set with its declared total
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileData {
    /// Declared tile count, validated against the list length
    pub total_number: usize,
    /// The tiles
    pub tiles: Vec<TileDefinition>,
}

/// One tile's id and rotation-0 segment codes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDefinition {
    /// Tile id, unique within the set
    pub id: u32,
    /// Segment code for side A
    pub side_a: String,
    /// Segment code for side B
    pub side_b: String,
    /// Segment code for side C
    pub side_c: String,
}

/// Parse a definition from a JSON string
///
/// # Errors
///
/// Returns `DefinitionParse` on malformed JSON.
pub fn parse_definition(json: &str) -> Result<PuzzleDefinition> {
    serde_json::from_str(json).map_err(|source| PuzzleError::DefinitionParse {
        path: Path::new("<inline>").to_path_buf(),
        source,
    })
}

/// Load and build a puzzle from a definition file
///
/// # Errors
///
/// Returns `DefinitionRead`/`DefinitionParse` on file problems, or any
/// validation or topology error raised while building the graph.
pub fn load_puzzle(path: &Path) -> Result<(Tetrahedron, TilePool)> {
    let json = std::fs::read_to_string(path).map_err(|source| PuzzleError::DefinitionRead {
        path: path.to_path_buf(),
        source,
    })?;
    let definition: PuzzleDefinition =
        serde_json::from_str(&json).map_err(|source| PuzzleError::DefinitionParse {
            path: path.to_path_buf(),
            source,
        })?;
    build_puzzle(&definition)
}

/// Build the tetrahedron graph and tile pool from a parsed definition
///
/// # Errors
///
/// Returns the first validation or topology error encountered; the finished
/// graph additionally passes a full integrity check before being returned.
pub fn build_puzzle(definition: &PuzzleDefinition) -> Result<(Tetrahedron, TilePool)> {
    // Pass 1: create every face and tile position; joins wait until all
    // nodes exist.
    let mut faces = Vec::with_capacity(definition.faces.len());
    let mut positions: Vec<TilePosition> = Vec::new();
    let mut position_index: HashMap<String, usize> = HashMap::new();

    for face_definition in &definition.faces {
        let mut indices = Vec::with_capacity(face_definition.tile_positions.len());
        for position_definition in &face_definition.tile_positions {
            let position = TilePosition::new(&position_definition.name, &face_definition.name);
            let id = position.id();
            let index = positions.len();
            if position_index.insert(id.clone(), index).is_some() {
                return Err(PuzzleError::DuplicatePosition { id });
            }
            positions.push(position);
            indices.push(index);
        }
        faces.push(Face::new(&face_definition.name, indices)?);
    }

    let face_sizes: HashMap<&str, usize> = definition
        .faces
        .iter()
        .map(|face| (face.name.as_str(), face.tile_positions.len()))
        .collect();

    // Pass 2: resolve joins through the index.
    for (face, face_definition) in faces.iter_mut().zip(&definition.faces) {
        for join in &face_definition.joins {
            let target_count = *face_sizes.get(join.of_face.as_str()).ok_or_else(|| {
                PuzzleError::UnknownJoinTarget {
                    from: format!("Face {}", face_definition.name),
                    target: join.of_face.clone(),
                }
            })?;
            face.join(join.from_side, join.to_side, &join.of_face, target_count)?;
        }
    }

    for face_definition in &definition.faces {
        for position_definition in &face_definition.tile_positions {
            let id = format!("{}-{}", face_definition.name, position_definition.name);
            let self_index = position_index[&id];
            for join in &position_definition.joins {
                let target_id = format!("{}-{}", join.of_face, join.of_position);
                let target =
                    *position_index
                        .get(&target_id)
                        .ok_or_else(|| PuzzleError::UnknownJoinTarget {
                            from: id.clone(),
                            target: target_id.clone(),
                        })?;
                positions[self_index].add_join(join.from_side, join.to_side, target, self_index)?;
            }
        }
    }

    let tetrahedron = Tetrahedron::new(&definition.puzzle, faces, positions)?;
    tetrahedron.integrity_check()?;

    let pool = build_tile_pool(&definition.tile_data)?;
    Ok((tetrahedron, pool))
}

/// Build the tile pool from parsed tile data
///
/// # Errors
///
/// Returns `TileCountMismatch` when the declared total disagrees with the
/// list, `InvalidSegments` for malformed codes, or `DuplicateTileId`.
pub fn build_tile_pool(tile_data: &TileData) -> Result<TilePool> {
    if tile_data.total_number != tile_data.tiles.len() {
        return Err(PuzzleError::TileCountMismatch {
            declared: tile_data.total_number,
            actual: tile_data.tiles.len(),
        });
    }
    let tiles = tile_data
        .tiles
        .iter()
        .map(|tile| Tile::new(tile.id, &tile.side_a, &tile.side_b, &tile.side_c))
        .collect::<Result<Vec<Tile>>>()?;
    TilePool::new(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "puzzle": "Minimal",
        "faces": [
            { "name": "1",
              "joins": [
                  { "fromSide": "A", "toSide": "A", "ofFace": "2" },
                  { "fromSide": "B", "toSide": "B", "ofFace": "3" },
                  { "fromSide": "C", "toSide": "C", "ofFace": "4" } ],
              "tilePositions": [
                  { "name": "1",
                    "joins": [
                        { "fromSide": "A", "toSide": "A", "ofFace": "2", "ofPosition": "1" },
                        { "fromSide": "B", "toSide": "B", "ofFace": "3", "ofPosition": "1" },
                        { "fromSide": "C", "toSide": "C", "ofFace": "4", "ofPosition": "1" } ] } ] },
            { "name": "2",
              "joins": [
                  { "fromSide": "A", "toSide": "A", "ofFace": "1" },
                  { "fromSide": "B", "toSide": "B", "ofFace": "4" },
                  { "fromSide": "C", "toSide": "C", "ofFace": "3" } ],
              "tilePositions": [
                  { "name": "1",
                    "joins": [
                        { "fromSide": "A", "toSide": "A", "ofFace": "1", "ofPosition": "1" },
                        { "fromSide": "B", "toSide": "B", "ofFace": "4", "ofPosition": "1" },
                        { "fromSide": "C", "toSide": "C", "ofFace": "3", "ofPosition": "1" } ] } ] },
            { "name": "3",
              "joins": [
                  { "fromSide": "A", "toSide": "A", "ofFace": "4" },
                  { "fromSide": "B", "toSide": "B", "ofFace": "1" },
                  { "fromSide": "C", "toSide": "C", "ofFace": "2" } ],
              "tilePositions": [
                  { "name": "1",
                    "joins": [
                        { "fromSide": "A", "toSide": "A", "ofFace": "4", "ofPosition": "1" },
                        { "fromSide": "B", "toSide": "B", "ofFace": "1", "ofPosition": "1" },
                        { "fromSide": "C", "toSide": "C", "ofFace": "2", "ofPosition": "1" } ] } ] },
            { "name": "4",
              "joins": [
                  { "fromSide": "A", "toSide": "A", "ofFace": "3" },
                  { "fromSide": "B", "toSide": "B", "ofFace": "2" },
                  { "fromSide": "C", "toSide": "C", "ofFace": "1" } ],
              "tilePositions": [
                  { "name": "1",
                    "joins": [
                        { "fromSide": "A", "toSide": "A", "ofFace": "3", "ofPosition": "1" },
                        { "fromSide": "B", "toSide": "B", "ofFace": "2", "ofPosition": "1" },
                        { "fromSide": "C", "toSide": "C", "ofFace": "1", "ofPosition": "1" } ] } ] }
        ],
        "tileData": {
            "totalNumber": 4,
            "tiles": [
                { "id": 1, "sideA": "1000", "sideB": "1100", "sideC": "1110" },
                { "id": 2, "sideA": "0100", "sideB": "1011", "sideC": "0111" },
                { "id": 3, "sideA": "0001", "sideB": "1101", "sideC": "1010" },
                { "id": 4, "sideA": "0010", "sideB": "0011", "sideC": "0101" }
            ]
        }
    }"#;

    #[test]
    fn test_builds_minimal_puzzle() {
        let definition = parse_definition(MINIMAL).unwrap();
        let (tetrahedron, pool) = build_puzzle(&definition).unwrap();

        assert_eq!(tetrahedron.name(), "Minimal");
        assert_eq!(tetrahedron.tile_position_count(), 4);
        assert_eq!(pool.tile_count(), 4);
        assert!(tetrahedron.integrity_check().is_ok());
        assert_eq!(tetrahedron.position_index("3-1"), Some(2));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            parse_definition("{ not json"),
            Err(PuzzleError::DefinitionParse { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_tile_total() {
        let definition = parse_definition(&MINIMAL.replace(r#""totalNumber": 4"#, r#""totalNumber": 5"#))
            .unwrap();
        assert!(matches!(
            build_puzzle(&definition),
            Err(PuzzleError::TileCountMismatch {
                declared: 5,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_rejects_unknown_join_target() {
        let definition = parse_definition(
            &MINIMAL.replace(
                r#"{ "fromSide": "A", "toSide": "A", "ofFace": "3", "ofPosition": "1" }"#,
                r#"{ "fromSide": "A", "toSide": "A", "ofFace": "3", "ofPosition": "9" }"#,
            ),
        )
        .unwrap();
        assert!(matches!(
            build_puzzle(&definition),
            Err(PuzzleError::UnknownJoinTarget { .. })
        ));
    }

    #[test]
    fn test_rejects_missing_position_join() {
        let definition = parse_definition(&MINIMAL.replace(
            r#"{ "fromSide": "B", "toSide": "B", "ofFace": "2", "ofPosition": "1" },"#,
            "",
        ))
        .unwrap();
        assert!(matches!(
            build_puzzle(&definition),
            Err(PuzzleError::MissingJoins { .. })
        ));
    }
}

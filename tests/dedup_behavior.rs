// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Deduplication behavior over loaded scenes

use anyhow::Result;
use p3d_export::io::parse_scene;
use p3d_export::{canonical_name, group_meshes, meshes_equal};

const SCENE: &str = r#"{
    "meshes": [
        {"name": "Wheel.002", "vertices": [[0,0,0],[1,0,0],[0,1,0]], "faces": [[0,1,2]]},
        {"name": "Body", "vertices": [[0,0,0],[2,0,0],[2,1,0],[0,1,0]], "faces": [[0,1,2,3]]},
        {"name": "Wheel.001", "vertices": [[0,0,0],[1,0,0],[0,1,0]], "faces": [[0,1,2]]},
        {"name": "Flipped", "vertices": [[0,0,0],[1,0,0],[0,1,0]], "faces": [[0,2,1]]},
        {"name": "Wheel", "vertices": [[0,0,0],[1,0,0],[0,1,0]], "faces": [[0,1,2]]}
    ],
    "objects": [
        {"name": "Wheel", "mesh": "Wheel"},
        {"name": "Body", "mesh": "Body"}
    ]
}"#;

#[test]
fn test_groups_over_loaded_scene() -> Result<()> {
    let scene = parse_scene(SCENE)?;
    let groups = group_meshes(&scene);

    // Re-keying to "wheel" moves the group behind "flipped"
    assert_eq!(groups.names(), vec!["body", "flipped", "wheel"]);

    let wheel = groups.get("wheel").unwrap();
    let members: Vec<&str> = wheel.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(members, vec!["Wheel.002", "Wheel.001", "Wheel"]);
    assert_eq!(wheel.representative().name, "Wheel.002");
    Ok(())
}

#[test]
fn test_every_mesh_grouped_once() -> Result<()> {
    let scene = parse_scene(SCENE)?;
    let groups = group_meshes(&scene);

    let mut grouped: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.members.iter().map(|m| m.name.as_str()))
        .collect();
    grouped.sort();

    let mut expected: Vec<&str> = scene.meshes.iter().map(|m| m.name.as_str()).collect();
    expected.sort();
    assert_eq!(grouped, expected);

    for group in &groups {
        for member in &group.members {
            assert!(meshes_equal(group.representative(), member));
        }
    }
    Ok(())
}

#[test]
fn test_group_names_are_canonical_and_shortest() -> Result<()> {
    let scene = parse_scene(SCENE)?;
    let groups = group_meshes(&scene);

    for group in &groups {
        let shortest = group
            .members
            .iter()
            .map(|m| canonical_name(&m.name))
            .min_by_key(|name| name.chars().count())
            .unwrap();
        assert_eq!(group.name, shortest);
        assert!(!group.name.contains(' ') && !group.name.contains('.'));
        assert_eq!(group.name, group.name.to_lowercase());
    }
    Ok(())
}

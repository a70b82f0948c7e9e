//! Render-scene collaborator.
//!
//! The engine never draws anything. It creates, moves and removes scene
//! objects through [`RenderScene`] so a real renderer can mirror the pools.
//! Object positions are world-local: they are children of a world group
//! whose translation is set with [`RenderScene::set_world_offset`].

use std::collections::BTreeMap;

use glam::{DQuat, DVec3};

use strafe_core::enums::SceneObjectKind;
use strafe_core::types::SceneHandle;

/// Operations the simulation needs from a scene graph.
pub trait RenderScene {
    /// Create an object under the world group and return its handle.
    fn add_object(&mut self, kind: SceneObjectKind, position: DVec3) -> SceneHandle;

    /// Remove an object. Unknown handles are ignored.
    fn remove_object(&mut self, handle: SceneHandle);

    /// Move an object to a new world-local position.
    fn move_object(&mut self, handle: SceneHandle, position: DVec3);

    /// Fade an object. Only explosion debris uses this.
    fn set_opacity(&mut self, _handle: SceneHandle, _opacity: f64) {}

    /// Translate the world group.
    fn set_world_offset(&mut self, offset: DVec3);

    /// Place the airframe (and the camera riding on it).
    fn set_player_transform(&mut self, position: DVec3, orientation: DQuat);
}

/// A scene object as tracked by [`HeadlessScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub kind: SceneObjectKind,
    pub position: DVec3,
    pub opacity: f64,
}

/// In-memory scene used for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessScene {
    objects: BTreeMap<SceneHandle, SceneObject>,
    next_handle: u64,
    world_offset: DVec3,
    player_position: DVec3,
    player_orientation: DQuat,
    removed: u64,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of live objects of one kind.
    pub fn count(&self, kind: SceneObjectKind) -> usize {
        self.objects.values().filter(|o| o.kind == kind).count()
    }

    pub fn get(&self, handle: SceneHandle) -> Option<&SceneObject> {
        self.objects.get(&handle)
    }

    pub fn contains(&self, handle: SceneHandle) -> bool {
        self.objects.contains_key(&handle)
    }

    /// Live objects in handle (creation) order.
    pub fn objects(&self) -> impl Iterator<Item = (SceneHandle, &SceneObject)> {
        self.objects.iter().map(|(h, o)| (*h, o))
    }

    /// Total objects removed since creation.
    pub fn removed_count(&self) -> u64 {
        self.removed
    }

    pub fn world_offset(&self) -> DVec3 {
        self.world_offset
    }

    pub fn player_transform(&self) -> (DVec3, DQuat) {
        (self.player_position, self.player_orientation)
    }
}

impl RenderScene for HeadlessScene {
    fn add_object(&mut self, kind: SceneObjectKind, position: DVec3) -> SceneHandle {
        let handle = SceneHandle(self.next_handle);
        self.next_handle += 1;
        self.objects.insert(
            handle,
            SceneObject {
                kind,
                position,
                opacity: 1.0,
            },
        );
        handle
    }

    fn remove_object(&mut self, handle: SceneHandle) {
        if self.objects.remove(&handle).is_some() {
            self.removed += 1;
        }
    }

    fn move_object(&mut self, handle: SceneHandle, position: DVec3) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.position = position;
        }
    }

    fn set_opacity(&mut self, handle: SceneHandle, opacity: f64) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.opacity = opacity;
        }
    }

    fn set_world_offset(&mut self, offset: DVec3) {
        self.world_offset = offset;
    }

    fn set_player_transform(&mut self, position: DVec3, orientation: DQuat) {
        self.player_position = position;
        self.player_orientation = orientation;
    }
}

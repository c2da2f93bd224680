use crate::shape::{Ball, Disc, Line, OrientedCube, Plane, Tetrahedron, Tube};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A tube shape.
    Tube,
    /// A line shape.
    Line,
    /// A plane shape.
    Plane,
    /// A disc shape.
    Disc,
    /// An oriented cube shape.
    OrientedCube,
    /// A tetrahedron shape.
    Tetrahedron,
}

/// Any of the shapes that can be voxelized, with its actual type.
///
/// With the `serde-serialize` feature, shapes are (de)serialized with an explicit `type`
/// tag, e.g., `{"type": "Ball", "center": [0, 0, 0], "outer_radius": 2, "inner_radius": 0}`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(tag = "type")
)]
pub enum VoxelShape {
    /// A ball shape.
    Ball(Ball),
    /// A tube shape.
    Tube(Tube),
    /// A line shape.
    Line(Line),
    /// A plane shape.
    Plane(Plane),
    /// A disc shape.
    Disc(Disc),
    /// An oriented cube shape.
    OrientedCube(OrientedCube),
    /// A tetrahedron shape.
    Tetrahedron(Tetrahedron),
}

impl VoxelShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Ball(_) => ShapeType::Ball,
            Self::Tube(_) => ShapeType::Tube,
            Self::Line(_) => ShapeType::Line,
            Self::Plane(_) => ShapeType::Plane,
            Self::Disc(_) => ShapeType::Disc,
            Self::OrientedCube(_) => ShapeType::OrientedCube,
            Self::Tetrahedron(_) => ShapeType::Tetrahedron,
        }
    }
}

macro_rules! impl_from_shape(
    ($($variant: ident),*) => {$(
        impl From<$variant> for VoxelShape {
            #[inline]
            fn from(shape: $variant) -> Self {
                VoxelShape::$variant(shape)
            }
        }
    )*}
);

impl_from_shape!(Ball, Tube, Line, Plane, Disc, OrientedCube, Tetrahedron);

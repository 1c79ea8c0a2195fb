// Symmetries module: exact symmetry operations, Hall symbols and finite group closure
// This module provides the crystallographic symmetry engine behind the group catalog

// ======================== MODULE DECLARATIONS ========================
pub mod crystal_systems;
pub mod hall_symbols;
pub mod symmetry_codes;
pub mod symmetry_groups;
pub mod symmetry_operations;
mod symmetry_parsing;

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    Operation,          // struct - affine operation, integer matrix + translation in 24ths
    BoundedOperation,   // struct - operation with translation reduced into [0, 1)
    PointOperation,     // struct - operation with zero translation
    OperationType,      // enum - Identity, Translation, Inversion, Rotoinversion, Reflection, Transflection, Rotation, Rototranslation
    RotationSense,      // enum - Positive / Negative rotation sense about the normalized axis
};

// Operation impl methods:
//   new(tf: Matrix3<i32>, tl24: Vector3<i32>) -> Self               - exact constructor
//   identity() / inversion() / translation(tl24) -> Self            - common operations
//   from_code(code: &str) -> Result<Self, ParseError>               - parses "-x+1/2,y,-z+1/2"
//   from_pair(tf, tl: Vector3<f64>) / from_matrix(&Matrix4<f64>)    - fallible numeric constructors
//   code(&self) -> String                                           - canonical ITC triplet (also Display)
//   inverse / pow(n) / bounded / reciprocal                         - algebra
//   typ / fold / order / glide24 / glide / axis / orientation / sense / name - classification
//   transform(&[Vector3<f64>]) / transform_point / extincts(&hkl)   - action on points and reflections

// ======================== HALL SYMBOLS ========================
pub use hall_symbols::{
    HallSymbol,             // struct - parsed Hall symbol: centrosymmetry, lattice, clauses, origin shift
    HallClause,             // struct - one rotation clause such as "-4bd"
    HallLattice,            // enum - P, A, B, C, I, R, S, T, F centerings
    HallAxis,               // enum - axis symbol as written: x, y, z, ', ", *
    HallTranslation,        // enum - translation letters a, b, c, n, u, v, w, d
    Principal,              // enum - x, y, z reference direction for face diagonals
    RotationAxis,           // enum - resolved axis of a clause
    parse_hall_symbol,      // fn(symbol: &str) -> Result<Vec<Operation>, ParseError> - generators of a Hall symbol
    normalize_hall_symbol,  // fn(symbol: &str) -> String - case/underscore/whitespace-insensitive form
};

// HallSymbol impl methods:
//   generators(&self) -> Vec<Operation>                             - centering ops, clause ops, inversion (origin shifted)
//   FromStr / Display                                               - parse and print the normalized symbol

// ======================== GROUPS ========================
pub use symmetry_groups::{
    Group,          // struct - closed finite group of bounded operations
    GroupRecord,    // struct - serialized {generators, operations} form of a group
};
pub use crystal_systems::{
    CrystalSystem,              // enum - the seven crystal systems
    identify_crystal_system,    // fn(operations) -> CrystalSystem - classification by fold/axis counts
};

// Group impl methods:
//   new(generators: &[Operation]) -> Result<Self, GroupConstructionError> - closure from generators
//   from_hall(symbol: &str) -> crate::Result<Self>                  - parse + closure
//   from_closed_parts(generators, operations) -> Result<Self, _>   - trusted path used by deserialization
//   operations / generators / order / contains                     - accessors
//   system / is_centrosymmetric / is_enantiomorphic / is_polar     - classification
//   is_extinct(&hkl) -> bool                                        - systematic absence test
//   lauefy / reciprocate -> Result<Group, _>                        - derived groups

mod _tests_symmetry_groups;

//! Line-oriented GLSL source builder.
//!
//! The tessera shader assembler composes every shader from constant snippets,
//! caller-supplied fragments and per-primitive algorithm bodies. This crate
//! owns the mechanics of that composition so ordering and scoping are
//! enforced by structure rather than by string-literal layout.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`builder`] | `SourceBuilder` |
//! | [`decl`] | `Varying`, `StorageQualifier`, `Interpolation` |
//!
//! # Quick start
//!
//! ```rust
//! use tessera_glsl::{SourceBuilder, StorageQualifier, Varying};
//!
//! let mut b = SourceBuilder::new();
//! b.version("330 core");
//! b.declare(StorageQualifier::Out, &[Varying::flat("v_instance", "int")]);
//! b.open("void main()");
//! b.line("v_instance = gl_InstanceID;");
//! b.scope("/* caller code */");
//! b.close();
//!
//! let src = b.finish();
//! assert!(src.starts_with("#version 330 core\nflat out int v_instance;\n"));
//! ```

pub mod builder;
pub mod decl;

pub use builder::SourceBuilder;
pub use decl::{declarations, Interpolation, StorageQualifier, Varying};

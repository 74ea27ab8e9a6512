//! GLSL shader assembler for tessera's drawing primitives.
//!
//! Given a primitive kind and an [`InjectionBundle`] of caller GLSL
//! fragments, the generators assemble complete `#version 330 core` vertex
//! and fragment sources. Every source shares the drawer uniform blocks and
//! the world/view/clip transform varyings; each kind adds its own geometry
//! setup and antialiasing or compositing body.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`primitive`] | `PrimitiveKind`, `ShaderStage` |
//! | [`bundle`] | `InjectionBundle` |
//! | [`layout`] | per-kind varyings and uniforms |
//! | [`preamble`] | shared snippets (constants, uniform blocks, transform) |
//! | [`primitives`] | the fourteen per-(kind, stage) generators |
//! | [`generators`] | `ShaderGenerators`, `Gl3Generators`, `ProgramSource` |
//! | [`diagnostics`] | `ShaderCompileError` |
//!
//! Generation is pure: no state is kept between calls and identical inputs
//! produce identical text.
//!
//! ```rust
//! use tessera_shaders::{Gl3Generators, InjectionBundle, PrimitiveKind, ShaderGenerators};
//!
//! let bundle = InjectionBundle::new()
//!     .with_uniforms("uniform float u_time;")
//!     .with_fragment_transform("x_fill.a *= 0.5;");
//!
//! let program = Gl3Generators::default().program(PrimitiveKind::Circle, &bundle);
//! assert!(program.fragment.contains("x_fill.a *= 0.5;"));
//! ```

pub mod bundle;
pub mod config;
pub mod diagnostics;
pub mod generators;
pub mod layout;
pub mod logging;
pub mod preamble;
pub mod primitive;
pub mod primitives;

pub use bundle::InjectionBundle;
pub use config::GeneratorConfig;
pub use diagnostics::ShaderCompileError;
pub use generators::{Gl3Generators, ProgramSource, ShaderGenerators};
pub use layout::PrimitiveLayout;
pub use primitive::{PrimitiveKind, ShaderStage, UnknownPrimitive};

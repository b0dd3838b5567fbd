use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct ParticleData {
    particles: Vec<String>,
    compound_particles: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/particle_data.json")?;
    let data: ParticleData = serde_json::from_str(&json)?;

    // Matching is ASCII case-insensitive against the stored key, so the
    // data itself must already be lower case.
    for particle in data.particles.iter().chain(data.compound_particles.iter()) {
        if particle.chars().any(|c| c.is_uppercase() || (c.is_whitespace() && c != ' ')) {
            return Err(format!("particle {:?} must be lower case", particle).into());
        }
    }
    if let Some(p) = data.particles.iter().find(|p| p.contains(' ')) {
        return Err(format!("one-word particle {:?} contains a space", p).into());
    }
    if let Some(p) = data
        .compound_particles
        .iter()
        .find(|p| p.split(' ').count() != 2)
    {
        return Err(format!("compound particle {:?} must be exactly two words", p).into());
    }

    write_set(&output.join("particles.rs"), &data.particles)?;
    write_set(
        &output.join("compound_particles.rs"),
        &data.compound_particles,
    )?;

    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v);
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}

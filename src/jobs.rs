use crate::config::TARGET;

/// One `slangc` invocation: a single entry point of a source compiled to one SPIR-V file.
/// Paths are relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileJob {
    pub source_path: &'static str,
    pub output_path: &'static str,
    pub entry_point: &'static str,
    pub target: &'static str,
    pub defines: &'static [&'static str],
}

impl CompileJob {
    /// `<source> -o <output> -target spirv -entry <entry> [-D<MACRO>]...`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.source_path.to_owned(),
            "-o".to_owned(),
            self.output_path.to_owned(),
            "-target".to_owned(),
            self.target.to_owned(),
            "-entry".to_owned(),
            self.entry_point.to_owned(),
        ];
        args.extend(self.defines.iter().map(|define| format!("-D{define}")));
        args
    }

    #[cfg(test)]
    pub fn output_file_name(&self) -> Option<&'static str> {
        std::path::Path::new(self.output_path).file_name()?.to_str()
    }
}

#[derive(Debug)]
pub struct ShaderGroup {
    pub name: &'static str,
    pub jobs: &'static [CompileJob],
}

macro_rules! job {
    ($source: literal => $output: literal, $entry: literal $(, $define: literal)*) => {
        CompileJob {
            source_path: concat!("shaders/", $source, ".slang"),
            output_path: concat!("spv/", $output, ".spv"),
            entry_point: $entry,
            target: TARGET,
            defines: &[$($define),*],
        }
    };
}

pub static GROUPS: &[ShaderGroup] = &[
    ShaderGroup {
        name: "Participating medium scene",
        jobs: &[
            job!("medium" => "medium.vert", "vertexMain"),
            job!("medium" => "medium.frag", "pixelMain"),
        ],
    },
    ShaderGroup {
        name: "Main renderer",
        jobs: &[
            job!("clouds" => "clouds.comp", "computeMain"),
            job!("clouds" => "clouds_repr.comp", "computeMain", "CLOUD_RENDER_SUBSAMPLE"),
            job!("transmittance" => "transmittance.comp", "computeMain"),
            job!("multiplescattering" => "multiplescattering.comp", "computeMain"),
            job!("skyview" => "skyview.comp", "computeMain"),
            job!("aerialperspective" => "aerialperspective.comp", "computeMain"),
            job!("depth" => "depth.vert", "vertexMain"),
            job!("depth" => "depth.frag", "pixelDepth"),
            job!("depth" => "linear_depth.frag", "pixelLinearDepth"),
            job!("terrain" => "terrain.vert", "vertexMain"),
            job!("terrain" => "terrain.frag", "pixelMain"),
            job!("sky" => "sky.vert", "vertexMain"),
            job!("sky" => "sky.frag", "pixelMain"),
            job!("occlusion" => "godrays.vert", "vertexMain"),
            job!("occlusion" => "mask.frag", "pixelMask"),
            job!("occlusion" => "blur.frag", "pixelBlur"),
            job!("compose" => "compose.vert", "vertexMain"),
            job!("compose" => "compose.frag", "pixelMain"),
            job!("postprocess" => "postprocess.vert", "vertexMain"),
            job!("postprocess" => "postprocess.frag", "pixelMain"),
        ],
    },
];

/// Every job in declaration order.
pub fn jobs() -> impl Iterator<Item = &'static CompileJob> {
    GROUPS.iter().flat_map(|group| group.jobs)
}

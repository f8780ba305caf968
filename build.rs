use std::cmp::Ordering;
use std::env;
use std::process::Command;

// CPU features the run-time kernels can use
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    cfg_flag: &'static str,
    target_arch: &'static [&'static str],
    detected: bool,
}

impl CpuFeature {
    // Lowest number == highest priority
    fn priority(&self) -> usize {
        match self.name {
            "avx2" => 0,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![CpuFeature {
            name: "avx2",
            cfg_flag: "avx2",
            target_arch: &["x86", "x86_64"],
            detected: false,
        }]
    }

    fn matches_target(&self, target_arch: &str) -> bool {
        self.target_arch.contains(&target_arch)
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            // Only the flags line counts, model names can contain anything
            let flags: Vec<&str> = cpuinfo
                .lines()
                .filter(|line| line.starts_with("flags"))
                .flat_map(|line| line.split_whitespace())
                .collect();

            for feature in features.iter_mut() {
                feature.detected = flags.contains(&feature.name);
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                if feature.name == "avx2" {
                    feature.detected = contents.contains("hw.optional.avx2_0: 1");
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn apply(features: &mut [CpuFeature], target_arch: &str, force_portable: bool) {
        features.sort();

        let cfg_flag = if force_portable {
            "fallback"
        } else {
            features
                .iter()
                .find(|feature| feature.detected && feature.matches_target(target_arch))
                .map(|feature| feature.cfg_flag)
                .unwrap_or("fallback")
        };

        println!("applying: {cfg_flag}");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let force_portable = env::var_os("CARGO_FEATURE_PORTABLE").is_some();

    let mut features = CpuFeature::features();

    // Host detection says nothing about a cross-compilation target
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    if host == target {
        PlatformDetector::detect_cpu_features(&mut features);
    }

    PlatformDetector::apply(&mut features, &target_arch, force_portable);
}

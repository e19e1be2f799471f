use forgebox_types::Language;

/// The per-language container recipe: base image, source filename inside
/// `/workspace`, and the build+run command. Source code is never passed
/// via command-line arguments — it is always written to the mounted file
/// named here, and the command below only ever references that filename.
pub struct Recipe {
    pub image: &'static str,
    pub filename: &'static str,
    pub command: &'static [&'static str],
}

pub fn recipe_for(language: Language) -> Recipe {
    match language {
        Language::Python => Recipe {
            image: "python:3.11-slim",
            filename: "code.py",
            command: &["python", "code.py"],
        },
        Language::Javascript => Recipe {
            image: "node:22-alpine",
            filename: "code.js",
            command: &["node", "code.js"],
        },
        Language::Java => Recipe {
            image: "openjdk:22-jre-slim",
            filename: "code.java",
            command: &["sh", "-c", "javac code.java && java code"],
        },
        Language::Cpp => Recipe {
            image: "gcc:latest",
            filename: "code.cpp",
            command: &["sh", "-c", "g++ -std=c++17 -o program code.cpp && ./program"],
        },
        Language::C => Recipe {
            image: "gcc:latest",
            filename: "code.c",
            command: &["sh", "-c", "gcc -std=c17 -o program code.c && ./program"],
        },
        Language::Go => Recipe {
            image: "golang:1.22-alpine",
            filename: "code.go",
            command: &[
                "sh",
                "-c",
                "cd /workspace && GOCACHE=/tmp GOPROXY=direct GOSUMDB=off GO111MODULE=auto go run code.go",
            ],
        },
    }
}

/// Go's module resolver needs to reach the network; every other language
/// runs fully network-disabled. This deliberately weakens isolation for
/// Go only — do not change it without pre-vendoring modules into the image.
pub fn network_disabled(language: Language) -> bool {
    language != Language::Go
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_go_keeps_the_network_enabled() {
        for lang in Language::ALL {
            assert_eq!(network_disabled(lang), lang != Language::Go);
        }
    }

    #[test]
    fn every_recipe_references_its_own_filename_in_the_command() {
        for lang in Language::ALL {
            let recipe = recipe_for(lang);
            let joined = recipe.command.join(" ");
            assert!(joined.contains(recipe.filename));
        }
    }
}

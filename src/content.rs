//! File bodies written by the generators.
//!
//! Every function here is pure: the text depends only on the arguments, so regenerating with the
//! same flags always produces byte-identical files.

const CONTENT_GLOB_EXTENSIONS: &str = "{ts,tsx,mdx}";

/// `app/layout.tsx`. Imports the global stylesheet when Tailwind templates are generated.
pub fn root_layout(include_globals: bool) -> String {
    let import_line = if include_globals {
        "import \"./globals.css\";\n\n"
    } else {
        ""
    };

    format!(
        r#"{import_line}export const metadata = {{ title: "App" }};

export default function RootLayout({{
  children,
}}: {{
  children: React.ReactNode;
}}) {{
  return (
    <html lang="zh">
      <body>{{children}}</body>
    </html>
  );
}}
"#
    )
}

/// `app/page.tsx`
pub fn app_page() -> String {
    hello_component("Page")
}

/// `pages/index.tsx`
pub fn pages_index() -> String {
    hello_component("Home")
}

fn hello_component(name: &str) -> String {
    format!(
        r#"export default function {name}() {{
  return (
    <main className="min-h-screen bg-slate-950 text-white">
      <h1 className="p-6 text-2xl font-semibold">Hello</h1>
    </main>
  );
}}
"#
    )
}

/// `pages/_app.tsx`, wiring the global stylesheet into the pages router.
pub fn pages_app() -> String {
    r#"import type { AppProps } from "next/app";
import "../styles/globals.css";

export default function App({ Component, pageProps }: AppProps) {
  return <Component {...pageProps} />;
}
"#
    .to_string()
}

pub fn globals_css() -> String {
    "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n".to_string()
}

/// `tailwind.config.ts`. Content globs point into `./src` when the src layout is used.
pub fn tailwind_config(use_src: bool) -> String {
    let prefix = if use_src { "./src" } else { "." };
    let pattern = CONTENT_GLOB_EXTENSIONS;

    format!(
        r#"import type {{ Config }} from "tailwindcss";

const config: Config = {{
  content: [
    "{prefix}/app/**/*.{pattern}",
    "{prefix}/pages/**/*.{pattern}",
    "{prefix}/components/**/*.{pattern}",
  ],
  theme: {{
    extend: {{}},
  }},
  plugins: [],
}};

export default config;
"#
    )
}

pub fn postcss_config() -> String {
    r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
"#
    .to_string()
}

/// `tsconfig.json`. The `@/*` alias resolves to `./src/*` or `./*` depending on the layout.
pub fn tsconfig(use_src: bool) -> String {
    let alias_target = if use_src { "./src/*" } else { "./*" };

    format!(
        r#"{{
  "compilerOptions": {{
    "target": "ES2017",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "react-jsx",
    "incremental": true,
    "paths": {{
      "@/*": ["{alias_target}"]
    }}
  }},
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx"],
  "exclude": ["node_modules"]
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_layout_imports_globals_only_when_asked() {
        let with_globals = root_layout(true);
        let without_globals = root_layout(false);

        assert!(with_globals.starts_with("import \"./globals.css\";\n\nexport const metadata"));
        assert!(without_globals.starts_with("export const metadata = { title: \"App\" };\n"));
        assert!(without_globals.contains("      <body>{children}</body>\n"));
        assert!(without_globals.ends_with("  );\n}\n"));
    }

    #[test]
    fn page_components_differ_only_by_name() {
        assert!(app_page().starts_with("export default function Page() {\n"));
        assert!(pages_index().starts_with("export default function Home() {\n"));
        assert_eq!(
            app_page().replace("Page()", "Home()"),
            pages_index(),
            "bodies should be identical"
        );
    }

    #[test]
    fn pages_app_imports_styles_globals() {
        assert!(pages_app().contains("import \"../styles/globals.css\";\n"));
        assert!(pages_app().contains("  return <Component {...pageProps} />;\n"));
    }

    #[test]
    fn globals_css_has_three_directives() {
        assert_eq!(
            globals_css(),
            "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n"
        );
    }

    #[test]
    fn tailwind_globs_follow_layout() {
        let src = tailwind_config(true);
        let flat = tailwind_config(false);

        assert!(src.contains("    \"./src/app/**/*.{ts,tsx,mdx}\",\n"));
        assert!(src.contains("    \"./src/components/**/*.{ts,tsx,mdx}\",\n"));
        assert!(flat.contains("    \"./pages/**/*.{ts,tsx,mdx}\",\n"));
        assert!(!flat.contains("./src"));
        assert!(flat.ends_with("export default config;\n"));
    }

    #[test]
    fn postcss_config_lists_plugins() {
        assert_eq!(
            postcss_config(),
            "module.exports = {\n  plugins: {\n    tailwindcss: {},\n    autoprefixer: {},\n  },\n};\n"
        );
    }

    #[test]
    fn tsconfig_alias_follows_layout() {
        assert!(tsconfig(true).contains("      \"@/*\": [\"./src/*\"]\n"));
        assert!(tsconfig(false).contains("      \"@/*\": [\"./*\"]\n"));
        assert!(tsconfig(false).starts_with("{\n  \"compilerOptions\": {\n"));
        assert!(tsconfig(false).ends_with("  \"exclude\": [\"node_modules\"]\n}\n"));
    }

    #[test]
    fn content_is_deterministic() {
        assert_eq!(tsconfig(true), tsconfig(true));
        assert_eq!(tailwind_config(false), tailwind_config(false));
        assert_eq!(root_layout(true), root_layout(true));
    }
}

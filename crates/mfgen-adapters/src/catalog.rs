//! The built-in template catalog.
//!
//! One [`CatalogEntry`] per [`TemplateId`]: the template text and the
//! variables it requires. The catalog is the explicit, statically checkable
//! table that replaces an implicit template directory layout: every
//! placeholder a template uses must appear in its `required` list, which
//! [`verify_catalog`] asserts.
//!
//! Static-copy templates declare no variables and contain no placeholders;
//! rendering them is a verbatim copy.

use mfgen_core::domain::TemplateId;

/// One template: its identity, required context variables, and text.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: TemplateId,
    pub required: &'static [&'static str],
    pub text: &'static str,
}

/// Look up a catalog entry. `None` means the id is outside the catalog,
/// which callers must treat as an internal defect.
pub fn entry(id: TemplateId) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id == id)
}

/// Startup-time consistency check: every template id has an entry, and
/// every `{{PLACEHOLDER}}` in a template's text is declared in `required`.
pub fn verify_catalog() -> Result<(), String> {
    for id in TemplateId::ALL {
        let Some(entry) = entry(*id) else {
            return Err(format!("template '{id}' has no catalog entry"));
        };
        for placeholder in placeholders(entry.text) {
            if !entry.required.contains(&placeholder.as_str()) {
                return Err(format!(
                    "template '{id}' uses undeclared placeholder '{placeholder}'"
                ));
            }
        }
    }
    Ok(())
}

/// Extract `{{NAME}}` placeholder names from a template text.
pub(crate) fn placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        rest = &rest[start + 2..];
        if let Some(end) = rest.find("}}") {
            let name = &rest[..end];
            if name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
                && !name.is_empty()
                && !found.contains(&name.to_string())
            {
                found.push(name.to_string());
            }
            rest = &rest[end + 2..];
        } else {
            break;
        }
    }
    found
}

// ── Host templates ───────────────────────────────────────────────────────────

const HOST_MANIFEST: &str = r#"{
  "name": "{{APP_NAME}}",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "start": "webpack serve --mode development",
    "build": "webpack --mode production",
    "start:all": "concurrently \"npm start\" {{START_ALL}}"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "concurrently": "^8.2.2",
    "css-loader": "^6.10.0",
    "html-webpack-plugin": "^5.6.0",
    "sass": "^1.71.0",
    "sass-loader": "^14.1.0",
    "style-loader": "^3.3.4",
    "ts-loader": "^9.5.1",
    "typescript": "^5.3.3",
    "webpack": "^5.90.0",
    "webpack-cli": "^5.1.4",
    "webpack-dev-server": "^4.15.1",
    "@types/react": "^18.2.0",
    "@types/react-dom": "^18.2.0"
  }
}
"#;

const HOST_WEBPACK_CONFIG: &str = r#"const HtmlWebpackPlugin = require('html-webpack-plugin');
const { ModuleFederationPlugin } = require('webpack').container;

module.exports = {
  entry: './src/index.tsx',
  mode: 'development',
  devServer: {
    port: {{HOST_PORT}},
    historyApiFallback: true,
  },
  output: {
    publicPath: 'auto',
  },
  resolve: {
    extensions: ['.tsx', '.ts', '.js'],
  },
  module: {
    rules: [
      { test: /\.tsx?$/, loader: 'ts-loader', exclude: /node_modules/ },
      { test: /\.scss$/, use: ['style-loader', 'css-loader', 'sass-loader'] },
    ],
  },
  plugins: [
    new ModuleFederationPlugin({
      name: '{{APP_NAME}}',
      remotes: {
{{REMOTE_ENTRIES}}
      },
      shared: {
        react: { singleton: true, eager: true },
        'react-dom': { singleton: true, eager: true },
      },
    }),
    new HtmlWebpackPlugin({ template: './public/index.html' }),
  ],
};
"#;

const HOST_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{APP_NAME}}</title>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

const HOST_ENTRY: &str = r#"import React, { Suspense, lazy } from 'react';
import { createRoot } from 'react-dom/client';
import './styles/main.scss';

{{REMOTE_IMPORTS}}

const App = () => (
  <div className="app-shell">
    <h1>{{APP_NAME}}</h1>
    <Suspense fallback={<div>Loading...</div>}>
{{REMOTE_OUTLETS}}
    </Suspense>
  </div>
);

const root = createRoot(document.getElementById('root')!);
root.render(<App />);
"#;

const HOST_DECLARATIONS: &str = r#"declare module '*.scss';

{{REMOTE_DECLARATIONS}}
"#;

// ── Microfrontend templates ──────────────────────────────────────────────────

const MF_MANIFEST: &str = r#"{
  "name": "{{MF_NAME}}",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "start": "webpack serve --mode development",
    "build": "webpack --mode production"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "css-loader": "^6.10.0",
    "html-webpack-plugin": "^5.6.0",
    "sass": "^1.71.0",
    "sass-loader": "^14.1.0",
    "style-loader": "^3.3.4",
    "ts-loader": "^9.5.1",
    "typescript": "^5.3.3",
    "webpack": "^5.90.0",
    "webpack-cli": "^5.1.4",
    "webpack-dev-server": "^4.15.1",
    "@types/react": "^18.2.0",
    "@types/react-dom": "^18.2.0"
  }
}
"#;

const MF_WEBPACK_CONFIG: &str = r#"const HtmlWebpackPlugin = require('html-webpack-plugin');
const { ModuleFederationPlugin } = require('webpack').container;

module.exports = {
  entry: './src/index.tsx',
  mode: 'development',
  devServer: {
    port: {{MF_PORT}},
  },
  output: {
    publicPath: 'auto',
  },
  resolve: {
    extensions: ['.tsx', '.ts', '.js'],
  },
  module: {
    rules: [
      { test: /\.tsx?$/, loader: 'ts-loader', exclude: /node_modules/ },
      { test: /\.scss$/, use: ['style-loader', 'css-loader', 'sass-loader'] },
    ],
  },
  plugins: [
    new ModuleFederationPlugin({
      name: '{{MF_NAME}}',
      filename: 'remoteEntry.js',
      exposes: {
        './App': './src/App',
      },
      shared: {
        react: { singleton: true, eager: true },
        'react-dom': { singleton: true, eager: true },
      },
    }),
    new HtmlWebpackPlugin({ template: './public/index.html' }),
  ],
};
"#;

const MF_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{MF_NAME}}</title>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

const MF_APP: &str = r#"import React from 'react';
import './styles/main.scss';

const App = () => (
  <div className="mf-root">
    <h2>{{MF_NAME}}</h2>
  </div>
);

export default App;
"#;

const MF_BOOTSTRAP: &str = r#"import React from 'react';
import { createRoot } from 'react-dom/client';
import App from './App';

const root = createRoot(document.getElementById('root')!);
root.render(<App />);
"#;

const MF_ENTRY: &str = r#"import('./bootstrap');

export {};
"#;

// ── Shared static assets ─────────────────────────────────────────────────────

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "ESNext",
    "moduleResolution": "node",
    "jsx": "react-jsx",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "sourceMap": true
  },
  "include": ["src"]
}
"#;

const STYLES_MAIN: &str = r#"body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  -webkit-font-smoothing: antialiased;
}
"#;

// ── The catalog ──────────────────────────────────────────────────────────────

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: TemplateId::HostManifest,
        required: &["APP_NAME", "START_ALL"],
        text: HOST_MANIFEST,
    },
    CatalogEntry {
        id: TemplateId::HostWebpackConfig,
        required: &["APP_NAME", "HOST_PORT", "REMOTE_ENTRIES"],
        text: HOST_WEBPACK_CONFIG,
    },
    CatalogEntry {
        id: TemplateId::HostIndexHtml,
        required: &["APP_NAME"],
        text: HOST_INDEX_HTML,
    },
    CatalogEntry {
        id: TemplateId::HostEntry,
        required: &["APP_NAME", "REMOTE_IMPORTS", "REMOTE_OUTLETS"],
        text: HOST_ENTRY,
    },
    CatalogEntry {
        id: TemplateId::HostDeclarations,
        required: &["REMOTE_DECLARATIONS"],
        text: HOST_DECLARATIONS,
    },
    CatalogEntry {
        id: TemplateId::MfManifest,
        required: &["MF_NAME"],
        text: MF_MANIFEST,
    },
    CatalogEntry {
        id: TemplateId::MfWebpackConfig,
        required: &["MF_NAME", "MF_PORT"],
        text: MF_WEBPACK_CONFIG,
    },
    CatalogEntry {
        id: TemplateId::MfIndexHtml,
        required: &["MF_NAME"],
        text: MF_INDEX_HTML,
    },
    CatalogEntry {
        id: TemplateId::MfApp,
        required: &["MF_NAME"],
        text: MF_APP,
    },
    CatalogEntry {
        id: TemplateId::MfBootstrap,
        required: &[],
        text: MF_BOOTSTRAP,
    },
    CatalogEntry {
        id: TemplateId::MfEntry,
        required: &[],
        text: MF_ENTRY,
    },
    CatalogEntry {
        id: TemplateId::Tsconfig,
        required: &[],
        text: TSCONFIG,
    },
    CatalogEntry {
        id: TemplateId::StylesMain,
        required: &[],
        text: STYLES_MAIN,
    },
];

// ── Tests ────────────────────────────────────────────────────────────────────

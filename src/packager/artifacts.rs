//! Generated deployment artifacts.
//!
//! Writes three fixed-content files into the staging root: a POSIX setup
//! script (made executable), a Windows batch setup script, and a
//! deployment README. The templates are static; they are parameterized
//! only by the product name and repository link, never by what was
//! actually staged.

use crate::error::{ArtifactError, Result};
use crate::packager::settings::Settings;
use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;
use tokio::fs;

const SETUP_SH: &str = r#"#!/bin/bash
# {{product_name}} Quick Setup Script

echo "🚀 Setting up {{product_name}} App..."

# Install dependencies
echo "📦 Installing dependencies..."
npm install

# Install Capacitor dependencies
echo "📱 Installing Capacitor dependencies..."
npm install @capacitor/core @capacitor/cli @capacitor/android
npm install @capacitor/camera @capacitor/geolocation @capacitor/push-notifications
npm install @capacitor/local-notifications @capacitor/device @capacitor/network
npm install @capacitor/filesystem @capacitor/share @capacitor/haptics
npm install @capacitor/status-bar @capacitor/splash-screen

echo "✅ Setup complete!"
echo ""
echo "🎯 Next steps:"
echo "1. npm run build:android    # Build and open Android Studio"
echo "2. npm run dev:android      # Build and run on device"
echo ""
echo "📱 For Google Play Store:"
echo "1. Open Android Studio"
echo "2. Build → Generate Signed Bundle/APK"
echo "3. Upload AAB to Google Play Console"
"#;

const SETUP_BAT: &str = r#"@echo off
echo 🚀 Setting up {{product_name}} App...

echo 📦 Installing dependencies...
npm install

echo 📱 Installing Capacitor dependencies...
npm install @capacitor/core @capacitor/cli @capacitor/android
npm install @capacitor/camera @capacitor/geolocation @capacitor/push-notifications
npm install @capacitor/local-notifications @capacitor/device @capacitor/network
npm install @capacitor/filesystem @capacitor/share @capacitor/haptics
npm install @capacitor/status-bar @capacitor/splash-screen

echo ✅ Setup complete!
echo.
echo 🎯 Next steps:
echo 1. npm run build:android    # Build and open Android Studio
echo 2. npm run dev:android      # Build and run on device
echo.
echo 📱 For Google Play Store:
echo 1. Open Android Studio
echo 2. Build → Generate Signed Bundle/APK
echo 3. Upload AAB to Google Play Console

pause
"#;

const DEPLOYMENT_README: &str = r#"# 🚀 {{product_name}} - Easy Deployment

## Quick Start

### For Linux/Mac:
```bash
chmod +x setup.sh
./setup.sh
```

### For Windows:
```cmd
setup.bat
```

### Manual Setup:
```bash
npm install
npm run build:android
```

## 📱 Build for Android

1. **Development**: `npm run dev:android`
2. **Production**: `npm run build:android`

## 🏪 Google Play Store

1. Open Android Studio
2. Build → Generate Signed Bundle/APK
3. Choose Android App Bundle (AAB)
4. Upload to Google Play Console

## 📋 Features

- ✅ Multi-language (Arabic, English, Urdu)
- ✅ Voice ordering with AI
- ✅ AR menu visualization
- ✅ Real-time tracking
- ✅ PIN-secured delivery
- ✅ Push notifications
- ✅ Native camera & GPS

## 🔗 Original Repository
{{{repository_url}}}

---
**Ready for production deployment!** 🎉
"#;

/// Render and write the setup scripts and the deployment README into the
/// staging root. Any render or write failure is fatal.
pub async fn write_artifacts(staging: &Path, settings: &Settings) -> Result<()> {
    let registry = Handlebars::new();
    let data = json!({
        "product_name": settings.product_name,
        "repository_url": settings.repository_url,
    });

    let render = |name: &str, template: &str| -> Result<String> {
        registry
            .render_template(template, &data)
            .map_err(|e| {
                ArtifactError::RenderFailed {
                    name: name.to_string(),
                    reason: e.to_string(),
                }
                .into()
            })
    };

    let setup_sh = staging.join("setup.sh");
    write_text(&setup_sh, &render("setup.sh", SETUP_SH)?).await?;
    make_executable(&setup_sh).await?;

    write_text(&staging.join("setup.bat"), &render("setup.bat", SETUP_BAT)?).await?;
    write_text(
        &staging.join("README.md"),
        &render("README.md", DEPLOYMENT_README)?,
    )
    .await?;

    Ok(())
}

async fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .await
        .map_err(|e| ArtifactError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(())
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .map_err(|e| ArtifactError::PermissionsFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(())
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

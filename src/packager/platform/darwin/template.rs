//! Installer manifest and script templates for darwin packages.

/// Distribution definition consumed by `productbuild`.
///
/// Optional UI elements (background image, welcome and conclusion text,
/// minimum OS version constraint) are emitted only when the matching
/// configuration field is non-empty, keeping the installer minimal when
/// optional content is absent.
///
/// Reference: Apple's distribution definition XML schema
/// <https://developer.apple.com/library/archive/documentation/DeveloperTools/Reference/DistributionDefinitionRef/Chapters/Introduction.html>
pub const DISTRIBUTION: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<installer-script minSpecVersion="1.000000">
    <title>{{Name}}</title>
    {{#if Darwin.BgPngPath}}
    <background mime-type="image/png" file="bg.png"/>
    {{/if}}
    <options customize="never" allow-external-scripts="no"/>
    <domains enable_localSystem="true" />
    <installation-check script="installCheck();"/>
    {{#if Darwin.WelcomeMsg}}
    <welcome mime-type="text/plain" file="welcome.txt"/>
    {{/if}}
    {{#if Darwin.MinOSXVersion}}
    <allowed-os-versions>
      <os-version min="{{Darwin.MinOSXVersion}}" />
    </allowed-os-versions>
    {{/if}}
    <script>
function installCheck() {
    if(system.files.fileExistsAtPath('/usr/local/{{BinName}}/bin/{{BinName}}')) {
      my.result.title = 'Previous Installation Detected';
      my.result.message = 'A previous installation of {{Name}} exists at /usr/local/{{BinName}}. This installer will remove the previous installation prior to installing. Please back up any data before proceeding.';
      my.result.type = 'Warning';
      return false;
  }
    return true;
}
    </script>
    <choices-outline>
        <line choice="{{Identifier}}.choice"/>
    </choices-outline>
    <choice id="{{Identifier}}.choice" title="{{Name}}">
        <pkg-ref id="{{Identifier}}.pkg"/>
    </choice>
    <pkg-ref id="{{Identifier}}.pkg" auth="Root">{{Identifier}}.pkg</pkg-ref>
    {{#if Darwin.ConclusionMsg}}
    <conclusion mime-type="text/plain" file="conclusion.txt"/>
    {{/if}}
</installer-script>
"#;

/// Removes any previous installation before the payload lands.
pub const PREINSTALL: &str = r#"#!/bin/bash
PROJROOT=/usr/local/{{BinName}}
echo "Removing previous installation"
if [ -d $PROJROOT ]; then
  rm -r $PROJROOT
fi
"#;

/// Fixes up permissions on the installed tree.
pub const POSTINSTALL: &str = r#"#!/bin/bash
PROJROOT=/usr/local/{{BinName}}
echo "Fixing permissions"
cd $PROJROOT
find . -exec chmod ugo+r \{\} \;
find bin -exec chmod ugo+rx \{\} \;
find . -type d -exec chmod ugo+rx \{\} \;
chmod o-w .
"#;

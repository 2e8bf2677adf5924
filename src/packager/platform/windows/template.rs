//! Installer manifest template for MSI packages.

/// WiX source consumed by `candle`.
///
/// Product fields come from the package configuration at render time;
/// `$(var.*)` defines (architecture, version triple, legacy-OS flag,
/// harvested source directory) are supplied on the compiler command line.
/// The UI is the stock WixUI_InstallDir wizard, the minimum dialog flow an
/// installer needs.
pub const INSTALLER_WXS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Wix xmlns="http://schemas.microsoft.com/wix/2006/wi">

<?if $(var.Arch) = x86 ?>
  <?define UpgradeCode = {4c3f9c1a-5f80-4f44-9a3e-2b1d6d6e0a31} ?>
  <?define SysFolder=SystemFolder ?>
<?else?>
  <?define UpgradeCode = {9a7e1b3c-41a2-4a56-8f43-7d0c5e2b9f18} ?>
  <?define SysFolder=System64Folder ?>
<?endif?>

<Product
    Id="*"
    Name="{{Name}} $(var.Arch) $(var.Version)"
    Language="1033"
    Version="$(var.ProductVersion)"
    Manufacturer="{{SiteURL}}"
    UpgradeCode="$(var.UpgradeCode)" >

<Package
    Id='*'
    Keywords='Installer'
    Description="{{Name}} Installer"
    Comments="{{Description}}"
    InstallerVersion="300"
    Compressed="yes"
    InstallScope="perMachine"
    Languages="1033" />

<Property Id="ARPCOMMENTS" Value="{{Description}}" />
<Property Id="ARPHELPLINK" Value="{{SiteURL}}" />
<Property Id="ARPURLINFOABOUT" Value="{{SiteURL}}" />
<Property Id="LicenseAccepted">1</Property>
<Icon Id="app.ico" SourceFile="images\app.ico"/>
<Property Id="ARPPRODUCTICON" Value="app.ico" />
<Media Id='1' Cabinet="{{BinName}}.cab" EmbedCab="yes" CompressionLevel="high" />
<?if $(var.IsLegacyOsSupported) = true ?>
    <Condition Message="Windows XP (with Service Pack 2) or greater required.">
        (VersionNT >= 501 AND (WindowsBuild > 2600 OR ServicePackLevel >= 2))
    </Condition>
<?else?>
    <Condition Message="Windows 7 (with Service Pack 1) or greater required.">
        ((VersionNT > 601) OR (VersionNT = 601 AND ServicePackLevel >= 1))
    </Condition>
<?endif?>
<MajorUpgrade AllowDowngrades="yes" />
<SetDirectory Id="INSTALLDIRROOT" Value="[%SYSTEMDRIVE]"/>

<CustomAction
    Id="SetApplicationRootDirectory"
    Property="ARPINSTALLLOCATION"
    Value="[INSTALLDIR]" />

<!-- Directory structure and environment entries -->
<Directory Id="TARGETDIR" Name="SourceDir">
  <Directory Id="INSTALLDIRROOT">
    <Directory Id="INSTALLDIR" Name="{{Name}}"/>
  </Directory>
  <Directory Id="EnvironmentEntries">
    <Directory Id="AppEnvironmentEntries" Name="{{Name}}"/>
  </Directory>
</Directory>

<DirectoryRef Id="AppEnvironmentEntries">
  <Component Id="Component_AppEnvironment" Guid="*">
    <RegistryKey
        Root="HKCU"
        Key="Software\[ProductName]">
            <RegistryValue
                Name="installed"
                Type="integer"
                Value="1"
                KeyPath="yes" />
            <RegistryValue
                Name="installLocation"
                Type="string"
                Value="[INSTALLDIR]" />
    </RegistryKey>
    <Environment
        Id="AppPathEntry"
        Action="set"
        Part="last"
        Name="PATH"
        Permanent="no"
        System="yes"
        Value="[INSTALLDIR]bin" />
    <RemoveFolder
        Id="AppEnvironmentEntries"
        On="uninstall" />
  </Component>
</DirectoryRef>

<!-- Install the harvested files -->
<Feature
    Id="{{BinName}}"
    Title="{{Name}}"
    Level="1">
      <ComponentRef Id="Component_AppEnvironment" />
      <ComponentGroupRef Id="AppFiles" />
</Feature>

<InstallExecuteSequence>
    <Custom Action="SetApplicationRootDirectory" Before="InstallFinalize" />
</InstallExecuteSequence>

<!-- Notify top level applications of the new PATH variable -->
<CustomActionRef Id="WixBroadcastEnvironmentChange" />

<!-- Installer user interface -->
<WixVariable Id="WixUILicenseRtf" Value="LICENSE.rtf" />
<WixVariable Id="WixUIBannerBmp" Value="images\Banner.jpg" />
<WixVariable Id="WixUIDialogBmp" Value="images\Dialog.jpg" />
<Property Id="WIXUI_INSTALLDIR" Value="INSTALLDIR" />
<UIRef Id="WixUI_InstallDir" />
<UIRef Id="WixUI_ErrorProgressText" />

</Product>
</Wix>
"#;

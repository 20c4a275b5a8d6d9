use bevy::app::App;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};

pub(crate) fn plugin(app: &mut App) {
    app.add_plugins((
        LogDiagnosticsPlugin::default(),
        FrameTimeDiagnosticsPlugin::default(),
    ));

    #[cfg(feature = "dev")]
    {
        use bevy_egui::EguiPlugin;
        use bevy_inspector_egui::quick::ResourceInspectorPlugin;
        use crate::resources::nav_bounds::NavBounds;
        use crate::resources::vjoy_config::VjoyConfig;

        app.add_plugins(EguiPlugin::default());

        app.add_plugins(ResourceInspectorPlugin::<VjoyConfig>::default());
        app.add_plugins(ResourceInspectorPlugin::<NavBounds>::default());
    }
}

use byte_writer::ByteWriter;
use common::codec::{write_length_prefixed_string, write_point, write_region, write_vec2};

use crate::{
    Animation, AnimationStep, Bccad, BccadHeader, BccadPartExtras, BccadStepExtras, DepthQuad,
    Sprite, SpritePart,
};

trait WriteToWriter {
    fn write_to_bytes(&self, writer: &mut ByteWriter);
}

pub(crate) fn write_bccad(bccad: &Bccad, writer: &mut ByteWriter) {
    let BccadHeader {
        timestamp,
        sheet_width,
        sheet_height,
    } = &bccad.header;

    writer.append_i32(*timestamp);
    writer.append_u16(*sheet_width);
    writer.append_u16(*sheet_height);

    writer.append_i32(bccad.sprites().len() as i32);
    bccad
        .sprites()
        .iter()
        .for_each(|sprite| sprite.write_to_bytes(writer));

    writer.append_i32(bccad.animations().len() as i32);
    bccad
        .animations()
        .iter()
        .for_each(|animation| animation.write_to_bytes(writer));

    writer.append_u8_slice(&bccad.trailing);
}

impl WriteToWriter for Sprite {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        writer.append_i32(self.parts().len() as i32);

        self.parts()
            .iter()
            .for_each(|part| part.write_to_bytes(writer));
    }
}

impl WriteToWriter for DepthQuad {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        writer.append_f32(self.top_left);
        writer.append_f32(self.bottom_left);
        writer.append_f32(self.top_right);
        writer.append_f32(self.bottom_right);
    }
}

impl WriteToWriter for SpritePart {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        let Self {
            region,
            pos,
            stretch,
            rotation,
            flip_x,
            flip_y,
            opacity,
            extras:
                BccadPartExtras {
                    mult_color,
                    screen_color,
                    designation,
                    reserved,
                    depth,
                    reserved_data,
                },
        } = self;

        write_region(writer, region);
        write_point(writer, pos);
        write_vec2(writer, *stretch);
        writer.append_f32(*rotation);
        writer.append_bool(*flip_x);
        writer.append_bool(*flip_y);
        writer.append_u8_slice(&<[u8; 3]>::from(*mult_color));
        writer.append_u8_slice(&<[u8; 3]>::from(*screen_color));
        writer.append_u8(*opacity);
        writer.append_u8_slice(reserved_data);
        writer.append_u8(*designation);
        writer.append_i16(*reserved);
        depth.write_to_bytes(writer);
    }
}

impl WriteToWriter for Animation {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        write_length_prefixed_string(writer, &self.extras.name().to_bytes());
        writer.append_u32(self.extras.interpolation);
        writer.append_i32(self.steps().len() as i32);

        self.steps()
            .iter()
            .for_each(|step| step.write_to_bytes(writer));
    }
}

impl WriteToWriter for AnimationStep {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        let Self {
            sprite_index,
            delay,
            stretch,
            opacity,
            extras:
                BccadStepExtras {
                    depth,
                    translate,
                    color,
                    rotation,
                    color_padding,
                    reserved,
                    opacity_high,
                },
        } = self;

        writer.append_u16(*sprite_index);
        writer.append_u16(*delay);
        write_point(writer, translate);
        writer.append_f32(*depth);
        write_vec2(writer, *stretch);
        writer.append_f32(*rotation);
        writer.append_u8_slice(&<[u8; 3]>::from(*color));
        writer.append_u8(*color_padding);
        writer.append_u8_slice(reserved);
        writer.append_u16(u16::from_le_bytes([*opacity, *opacity_high]));
    }
}

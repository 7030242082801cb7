<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Password input field on login page</description>
   <name>txt_Password</name>
   <tag></tag>
   <elementGuidId>login-password-input</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//input[@type='password' and @placeholder='Password']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>input[type='password'][placeholder='Password']</value>
      </entry>
      <entry>
         <key>BASIC</key>
         <value>//input[@type='password']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
